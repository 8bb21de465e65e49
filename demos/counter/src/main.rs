//! A counter driven by a single link.
//!
//! The demo plays both external collaborators at once: a stdout renderer
//! honoring the render protocol, and a transport loop feeding synthetic
//! clicks through request contexts, re-rendering only what the handler
//! marked.

use trellis::link::{Label, Link};
use trellis::{
    ClassNames, Component, Glyph, RequestContext, Shared, Value, ValueSource, Variant, render,
};

fn main() {
    let count = Shared::new(0u32);

    let model = count.clone();
    let mut increment: Link =
        Link::on_click_self("increment", Variant::Primary, move |link, ctx| {
            model.set(model.get() + 1);

            if model.get() >= 3 {
                link.set_variant(Variant::Success);
            }

            ctx.mark("count");
            ctx.mark(link.id().clone());
        });
    increment
        .set_label(Value::of("Add one"))
        .set_glyph(Some(Glyph::new("fa fa-plus")));

    let mut count_label = Label::bound("count", count.clone());

    println!("-- initial page --");
    paint_link(&mut increment);
    paint_label(&mut count_label);

    for _ in 0..3 {
        let mut ctx = RequestContext::new();
        increment.click(&mut ctx);

        println!("-- partial update --");
        for id in ctx.updates() {
            match id.as_str() {
                "count" => paint_label(&mut count_label),
                "increment" => paint_link(&mut increment),
                other => println!("<!-- no component for '{other}' -->"),
            }
        }
    }
}

fn paint_link(link: &mut Link) {
    let body = render::render(link);
    let classes = link.classes(&ClassNames).join(" ");

    println!("<a id=\"{}\" class=\"{classes}\">{body}</a>", link.id());
}

fn paint_label(label: &mut Label) {
    let body = render::render(label);

    println!("<span id=\"{}\">{body}</span>", label.id());
}
