//! Tests for the link widget.

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::cell::Cell;
    use std::rc::Rc;

    use trellis_core::model::{Dynamic, Shared, Value};
    use trellis_core::render;
    use trellis_core::{Component, Error, Id, MarkupSourcing, RequestContext};

    use crate::appearance::{ClassNames, Size, Variant};
    use crate::link::splitter::SplitterLike;
    use crate::link::{Glyph, Link};

    fn prepared_splitter(link: &mut Link) -> bool {
        link.prepare();
        link.splitter_visible()
    }

    #[test]
    fn splitter_shows_with_icon_and_label() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
            .set_label(Value::of("Save"));

        assert!(prepared_splitter(&mut link));
    }

    #[test]
    fn splitter_hides_without_label() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_glyph(Some(Glyph::new("fa fa-floppy-disk")));

        assert!(!prepared_splitter(&mut link));
    }

    #[test]
    fn splitter_hides_without_icon() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_label(Value::of("Save"));

        assert!(!prepared_splitter(&mut link));
    }

    #[test]
    fn splitter_hides_without_either() {
        let mut link: Link = Link::new("btn", Variant::Primary);

        assert!(!prepared_splitter(&mut link));
    }

    #[test]
    fn whitespace_label_counts_as_content() {
        // The label text is deliberately not trimmed.
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
            .set_label(Value::of(" "));

        assert!(prepared_splitter(&mut link));
    }

    #[test]
    fn recompute_overrides_the_previous_pass() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
            .set_label(Value::of("Save"));
        assert!(prepared_splitter(&mut link));

        link.set_glyph(None);
        assert!(!prepared_splitter(&mut link));
    }

    #[test]
    fn repeated_setter_calls_are_idempotent() {
        let mut once: Link = Link::new("btn", Variant::Primary);
        once.set_label(Value::of("Save"));

        let mut twice: Link = Link::new("btn", Variant::Primary);
        twice.set_label(Value::of("Save")).set_label(Value::of("Save"));

        once.prepare();
        twice.prepare();

        assert_eq!(once.label_text(), twice.label_text());
        assert_eq!(once.splitter_visible(), twice.splitter_visible());
    }

    #[test]
    fn construction_defaults() {
        let link: Link = Link::new("btn", Variant::Primary);

        assert_eq!(link.appearance().variant(), Variant::Primary);
        assert_eq!(link.appearance().size(), Size::Medium);
        assert!(!link.has_glyph());
        assert_eq!(link.label_text(), "");
        assert!(!link.is_enabled());
    }

    #[test]
    fn builder_requires_a_variant() {
        let result = Link::<()>::builder("btn").build();

        assert_eq!(result.err(), Some(Error::InvalidArgument("variant")));
    }

    #[test]
    fn builder_assembles_every_piece() {
        let link: Link<u32> = Link::builder("btn")
            .variant(Variant::Warning)
            .size(Size::Small)
            .model(Value::of(7))
            .label(Value::of("Seven"))
            .glyph(Glyph::new("fa fa-7"))
            .build()
            .unwrap();

        assert_eq!(link.appearance().variant(), Variant::Warning);
        assert_eq!(link.appearance().size(), Size::Small);
        assert_eq!(link.bound_value(), Some(7));
        assert_eq!(link.label_text(), "Seven");
        assert!(link.has_glyph());
    }

    #[test]
    fn bound_value_is_independent_of_the_label() {
        let link: Link<u32> = Link::with_label(
            "btn",
            Some(Box::new(Value::of(7))),
            Variant::Secondary,
            Value::of("Open"),
        );

        assert_eq!(link.bound_value(), Some(7));
        assert_eq!(link.label_text(), "Open");
    }

    #[test]
    fn click_forwards_the_context_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);

        let mut link: Link = Link::on_click("btn", Variant::Primary, move |ctx| {
            seen.set(seen.get() + 1);
            ctx.mark("status");
        });

        let mut ctx = RequestContext::new();
        link.click(&mut ctx);

        assert_eq!(calls.get(), 1);
        assert_eq!(ctx.updates(), [Id::new("status")]);
    }

    #[test]
    fn click_with_self_can_mutate_the_link() {
        let mut link: Link = Link::on_click_self("btn", Variant::Primary, |link, ctx| {
            link.set_label(Value::of("Clicked"));
            ctx.mark(link.id().clone());
        });

        let mut ctx = RequestContext::new();
        link.click(&mut ctx);

        assert_eq!(link.label_text(), "Clicked");
        assert_eq!(ctx.updates(), [Id::new("btn")]);
        assert!(link.is_enabled());
    }

    #[test]
    fn handler_installed_during_a_click_wins() {
        let mut link: Link = Link::on_click_self("btn", Variant::Primary, |link, _ctx| {
            link.set_on_click(|ctx| ctx.mark("replacement"));
        });

        let mut ctx = RequestContext::new();
        link.click(&mut ctx);
        link.click(&mut ctx);

        assert_eq!(ctx.updates(), [Id::new("replacement")]);
    }

    #[test]
    fn click_without_a_handler_is_ignored() {
        let mut link: Link = Link::new("btn", Variant::Primary);

        let mut ctx = RequestContext::new();
        link.click(&mut ctx);

        assert!(ctx.updates().is_empty());
        assert_eq!(link.label_text(), "");
    }

    #[test]
    fn fluent_setters_return_the_same_link() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        let expected: *const Link = &link;

        let returned: *const Link = link
            .set_label(Value::of("Save"))
            .set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
            .set_size(Size::Large)
            .set_variant(Variant::Danger);

        assert_eq!(expected, returned);
        assert_eq!(link.appearance().size(), Size::Large);
        assert_eq!(link.appearance().variant(), Variant::Danger);
    }

    #[test]
    fn children_render_in_registration_order() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_glyph(Some(Glyph::new("fa fa-floppy-disk")))
            .set_label(Value::of("Save"));

        assert_eq!(
            render::render(&mut link),
            "<i class=\"fa fa-floppy-disk\"></i>&nbsp;Save"
        );
    }

    #[test]
    fn label_bodies_are_escaped() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_label(Value::of("<b>Save</b>"));

        assert_eq!(render::render(&mut link), "&lt;b&gt;Save&lt;/b&gt;");
    }

    #[test]
    fn markup_is_panel_sourced() {
        let link: Link = Link::new("btn", Variant::Primary);

        assert_eq!(
            link.markup_sourcing(),
            MarkupSourcing::Panel {
                transform_root: true
            }
        );
    }

    #[test]
    fn label_tracks_a_shared_value() {
        let count = Shared::new(0);

        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_label(count.clone());

        count.set(3);

        assert_eq!(link.label_text(), "3");
    }

    #[test]
    fn label_accepts_a_dynamic_source() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_label(Dynamic::new(|| 2 + 2));

        assert_eq!(link.label_text(), "4");
    }

    #[test]
    fn classes_reflect_the_appearance() {
        let mut link: Link = Link::new("btn", Variant::Primary);
        link.set_variant(Variant::Danger).set_size(Size::Small);

        assert_eq!(link.classes(&ClassNames), ["btn", "btn-danger", "btn-sm"]);
    }

    struct TickSplitter {
        id: Id,
        visible: bool,
    }

    impl Component for TickSplitter {
        fn id(&self) -> &Id {
            &self.id
        }

        fn visible(&self) -> bool {
            self.visible
        }

        fn body(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(" | "))
        }
    }

    impl SplitterLike for TickSplitter {
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[test]
    fn builder_substitutes_children() {
        let mut link: Link = Link::builder("btn")
            .variant(Variant::Primary)
            .label(Value::of("Save"))
            .glyph(Glyph::new("fa fa-floppy-disk"))
            .splitter(TickSplitter {
                id: Id::new("splitter"),
                visible: false,
            })
            .build()
            .unwrap();

        assert_eq!(
            render::render(&mut link),
            "<i class=\"fa fa-floppy-disk\"></i> | Save"
        );
    }
}
