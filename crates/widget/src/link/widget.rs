use std::fmt;

use smol_str::SmolStr;
use trellis_core::model::{AsText, TextSource, Value, ValueSource};
use trellis_core::{Component, Error, Id, MarkupSourcing, RequestContext};

use crate::appearance::{Appearance, Catalog, Size, Variant};

use super::icon::{Glyph, Icon, IconLike};
use super::label::{Label, LabelLike};
use super::splitter::{Splitter, SplitterLike};

/// A clickable link styled like a button.
///
/// A link composes an optional icon, a text label, and a cosmetic splitter
/// that only renders when both icon and label content are present. The
/// splitter's visibility is recomputed from its siblings in
/// [`prepare`](Component::prepare), immediately before every render pass;
/// callers never set it themselves.
///
/// Clicks arrive from the transport collaborator through
/// [`click`](Link::click) and are forwarded to the caller-supplied
/// handler together with the request context; the link never inspects the
/// context. A link without a handler is disabled.
///
/// `T` is the type of the link's own bound value, which is independent of
/// the label's bound value: a link may carry one value while displaying
/// another.
///
/// # Example
/// ```
/// use trellis_widget::appearance::{Size, Variant};
/// use trellis_widget::core::{RequestContext, Value};
/// use trellis_widget::link::{Glyph, Link};
///
/// let mut save: Link = Link::on_click("save", Variant::Primary, |ctx| {
///     ctx.mark("status");
/// });
/// save.set_label(Value::of("Save"))
///     .set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
///     .set_size(Size::Large);
///
/// let mut ctx = RequestContext::new();
/// save.click(&mut ctx);
/// assert_eq!(ctx.updates().len(), 1);
/// ```
pub struct Link<T = ()> {
    id: Id,
    appearance: Appearance,
    icon: Box<dyn IconLike>,
    splitter: Box<dyn SplitterLike>,
    label: Box<dyn LabelLike>,
    model: Option<Box<dyn ValueSource<Value = T>>>,
    handler: Option<Handler<T>>,
}

enum Handler<T> {
    Context(Box<dyn FnMut(&mut RequestContext)>),
    SelfContext(Box<dyn FnMut(&mut Link<T>, &mut RequestContext)>),
}

impl<T> Link<T> {
    /// Creates a link with no bound value and an empty label.
    pub fn new(id: impl Into<Id>, variant: Variant) -> Self {
        Self::create(id.into(), None, variant, None)
    }

    /// Creates a link bound to `model`, with an empty label.
    pub fn with_model(
        id: impl Into<Id>,
        model: impl ValueSource<Value = T> + 'static,
        variant: Variant,
    ) -> Self {
        Self::create(id.into(), Some(Box::new(model)), variant, None)
    }

    /// Creates a link bound to `model` and labelled from `label`.
    pub fn with_label<L>(
        id: impl Into<Id>,
        model: Option<Box<dyn ValueSource<Value = T>>>,
        variant: Variant,
        label: L,
    ) -> Self
    where
        L: ValueSource + 'static,
        L::Value: fmt::Display,
    {
        Self::create(id.into(), model, variant, Some(Box::new(AsText(label))))
    }

    /// Creates a link whose click handler receives the request context.
    pub fn on_click(
        id: impl Into<Id>,
        variant: Variant,
        handler: impl FnMut(&mut RequestContext) + 'static,
    ) -> Self {
        let mut link = Self::new(id, variant);
        link.handler = Some(Handler::Context(Box::new(handler)));
        link
    }

    /// Creates a link whose click handler additionally receives the link
    /// itself, so it can mutate the label, glyph, or appearance reactively.
    pub fn on_click_self(
        id: impl Into<Id>,
        variant: Variant,
        handler: impl FnMut(&mut Link<T>, &mut RequestContext) + 'static,
    ) -> Self {
        let mut link = Self::new(id, variant);
        link.handler = Some(Handler::SelfContext(Box::new(handler)));
        link
    }

    /// Starts building a link; the required pieces are checked by
    /// [`Builder::build`].
    pub fn builder(id: impl Into<Id>) -> Builder<T> {
        Builder::new(id.into())
    }

    // The canonical construction shape every public constructor funnels
    // into. Children are registered in the fixed order icon, splitter,
    // label, so render collaborators reproduce that order.
    fn create(
        id: Id,
        model: Option<Box<dyn ValueSource<Value = T>>>,
        variant: Variant,
        label: Option<Box<dyn TextSource>>,
    ) -> Self {
        let mut label_part = Label::new("label");
        label_part.rebind(label.unwrap_or_else(empty_label_source));

        Self {
            id,
            appearance: Appearance::new(variant),
            icon: Box::new(Icon::new("icon")),
            splitter: Box::new(Splitter::new("splitter")),
            label: Box::new(label_part),
            model,
            handler: None,
        }
    }

    /// The appearance attached to this link.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The class names this link contributes, resolved through `catalog`.
    pub fn classes(&self, catalog: &dyn Catalog) -> Vec<SmolStr> {
        self.appearance.classify(catalog)
    }

    /// Whether the icon currently has a glyph.
    pub fn has_glyph(&self) -> bool {
        self.icon.has_glyph()
    }

    /// The label's bound value, coerced to its string form.
    pub fn label_text(&self) -> String {
        self.label.text()
    }

    /// Whether the splitter will render, as computed by the last
    /// [`prepare`](Component::prepare).
    pub fn splitter_visible(&self) -> bool {
        self.splitter.visible()
    }

    /// The link's own bound value, if a model is attached.
    pub fn bound_value(&self) -> Option<T> {
        self.model.as_ref().map(|model| model.get())
    }

    /// Whether a click handler is attached.
    ///
    /// A link without a handler is disabled; the transport collaborator
    /// should not deliver clicks to it.
    pub fn is_enabled(&self) -> bool {
        self.handler.is_some()
    }

    /// Replaces the label's bound source.
    ///
    /// Splitter visibility reflects the change at the next render pass,
    /// not immediately.
    pub fn set_label<S>(&mut self, source: S) -> &mut Self
    where
        S: ValueSource + 'static,
        S::Value: fmt::Display,
    {
        self.label.rebind(Box::new(AsText(source)));
        self
    }

    /// Replaces the icon's glyph; `None` clears it.
    pub fn set_glyph(&mut self, glyph: Option<Glyph>) -> &mut Self {
        self.icon.set_glyph(glyph);
        self
    }

    /// Sets the appearance size.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.appearance.set_size(size);
        self
    }

    /// Sets the appearance variant.
    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.appearance.set_variant(variant);
        self
    }

    /// Replaces the click handler with one receiving the request context.
    pub fn set_on_click(
        &mut self,
        handler: impl FnMut(&mut RequestContext) + 'static,
    ) -> &mut Self {
        self.handler = Some(Handler::Context(Box::new(handler)));
        self
    }

    /// Replaces the click handler with one that also receives the link.
    pub fn set_on_click_self(
        &mut self,
        handler: impl FnMut(&mut Link<T>, &mut RequestContext) + 'static,
    ) -> &mut Self {
        self.handler = Some(Handler::SelfContext(Box::new(handler)));
        self
    }

    /// Forwards a click to the attached handler.
    ///
    /// The transport collaborator calls this exactly once per user click,
    /// after it has applied any submitted state. A click delivered to a
    /// disabled link is ignored.
    pub fn click(&mut self, ctx: &mut RequestContext) {
        match self.handler.take() {
            Some(Handler::Context(mut handler)) => {
                handler(ctx);
                self.handler = Some(Handler::Context(handler));
            }
            Some(Handler::SelfContext(mut handler)) => {
                handler(self, ctx);

                // The handler may have installed a replacement; keep it.
                if self.handler.is_none() {
                    self.handler = Some(Handler::SelfContext(handler));
                }
            }
            None => {
                log::warn!("link '{}' received a click without a handler", self.id);
            }
        }
    }
}

impl<T> Component for Link<T> {
    fn id(&self) -> &Id {
        &self.id
    }

    fn prepare(&mut self) {
        // The splitter only renders between an icon and label content.
        // The label text is not trimmed: a single space counts as content.
        let visible = self.icon.has_glyph() && !self.label.text().is_empty();
        self.splitter.set_visible(visible);
    }

    fn markup_sourcing(&self) -> MarkupSourcing {
        MarkupSourcing::Panel {
            transform_root: true,
        }
    }

    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut dyn Component)) {
        visit(&mut *self.icon);
        visit(&mut *self.splitter);
        visit(&mut *self.label);
    }
}

/// Creates a [`Link`] with the given id and variant.
pub fn link<T>(id: impl Into<Id>, variant: Variant) -> Link<T> {
    Link::new(id, variant)
}

/// Builds a [`Link`] from optional pieces.
///
/// The variant is the one required piece; [`build`](Builder::build) fails
/// with [`Error::InvalidArgument`] when it is missing. The icon, label,
/// and splitter children default to the standard implementations and may
/// be substituted by anything fulfilling their capability.
///
/// # Example
/// ```
/// use trellis_widget::appearance::Variant;
/// use trellis_widget::core::Value;
/// use trellis_widget::link::Link;
///
/// let open: Link<u32> = Link::builder("open")
///     .variant(Variant::Info)
///     .model(Value::of(7))
///     .label(Value::of("Open"))
///     .build()?;
///
/// assert_eq!(open.bound_value(), Some(7));
/// # Ok::<(), trellis_widget::core::Error>(())
/// ```
pub struct Builder<T = ()> {
    id: Id,
    variant: Option<Variant>,
    size: Option<Size>,
    model: Option<Box<dyn ValueSource<Value = T>>>,
    label: Option<Box<dyn TextSource>>,
    glyph: Option<Glyph>,
    icon: Option<Box<dyn IconLike>>,
    label_part: Option<Box<dyn LabelLike>>,
    splitter: Option<Box<dyn SplitterLike>>,
    handler: Option<Handler<T>>,
}

impl<T> Builder<T> {
    fn new(id: Id) -> Self {
        Self {
            id,
            variant: None,
            size: None,
            model: None,
            label: None,
            glyph: None,
            icon: None,
            label_part: None,
            splitter: None,
            handler: None,
        }
    }

    /// Sets the required visual variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the size; defaults to [`Size::Medium`].
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Binds the link's own value.
    pub fn model(mut self, model: impl ValueSource<Value = T> + 'static) -> Self {
        self.model = Some(Box::new(model));
        self
    }

    /// Binds the label source; defaults to an empty string source.
    pub fn label<S>(mut self, source: S) -> Self
    where
        S: ValueSource + 'static,
        S::Value: fmt::Display,
    {
        self.label = Some(Box::new(AsText(source)));
        self
    }

    /// Sets the initial glyph.
    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Substitutes the icon child.
    pub fn icon(mut self, icon: impl IconLike + 'static) -> Self {
        self.icon = Some(Box::new(icon));
        self
    }

    /// Substitutes the label child; it must render body-only.
    pub fn label_part(mut self, label: impl LabelLike + 'static) -> Self {
        self.label_part = Some(Box::new(label));
        self
    }

    /// Substitutes the splitter child.
    pub fn splitter(mut self, splitter: impl SplitterLike + 'static) -> Self {
        self.splitter = Some(Box::new(splitter));
        self
    }

    /// Attaches a click handler receiving the request context.
    pub fn on_click(mut self, handler: impl FnMut(&mut RequestContext) + 'static) -> Self {
        self.handler = Some(Handler::Context(Box::new(handler)));
        self
    }

    /// Attaches a click handler that also receives the link itself.
    pub fn on_click_self(
        mut self,
        handler: impl FnMut(&mut Link<T>, &mut RequestContext) + 'static,
    ) -> Self {
        self.handler = Some(Handler::SelfContext(Box::new(handler)));
        self
    }

    /// Builds the link.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when no variant was supplied.
    pub fn build(self) -> Result<Link<T>, Error> {
        let variant = self.variant.ok_or(Error::InvalidArgument("variant"))?;

        let mut link = Link::create(self.id, self.model, variant, None);

        if let Some(icon) = self.icon {
            link.icon = icon;
        }
        if let Some(label_part) = self.label_part {
            link.label = label_part;
        }
        if let Some(splitter) = self.splitter {
            link.splitter = splitter;
        }

        if let Some(source) = self.label {
            link.label.rebind(source);
        }
        if let Some(glyph) = self.glyph {
            link.icon.set_glyph(Some(glyph));
        }
        if let Some(size) = self.size {
            link.appearance.set_size(size);
        }

        link.handler = self.handler;

        Ok(link)
    }
}

fn empty_label_source() -> Box<dyn TextSource> {
    Box::new(AsText(Value::of(String::new())))
}
