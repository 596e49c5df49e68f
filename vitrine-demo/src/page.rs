use vitrine_dom::{Document, Element};

/// The marketing page the demo drives: header, two sections and the contact form.
pub fn contact_page() -> Document {
    let header = Element::header()
        .id("site-header")
        .class("header")
        .layout(0, 80)
        .child(
            Element::nav().id("main-nav").children([
                Element::anchor("#").id("logo").child(Element::text("Vitrine")),
                Element::button("Menu").id("mobile-menu").attr("type", "button"),
                Element::div().id("nav-links").class("nav-links").children([
                    Element::anchor("#services")
                        .id("link-services")
                        .child(Element::text("Services")),
                    Element::anchor("#contact")
                        .id("link-contact")
                        .child(Element::text("Contact")),
                ]),
            ]),
        )
        .child(
            Element::button("")
                .id("theme-toggle")
                .attr("type", "button")
                .children([
                    Element::text("☀").id("icon-sun").class("sun"),
                    Element::text("☾").id("icon-moon").class("moon"),
                ]),
        )
        .child(Element::div().id("theme-menu").children([
            Element::div()
                .id("theme-light")
                .class("theme-option")
                .attr("data-theme", "light")
                .child(Element::text("Clair")),
            Element::div()
                .id("theme-dark")
                .class("theme-option")
                .attr("data-theme", "dark")
                .child(Element::text("Sombre")),
        ]));

    let form = Element::form().id("contactForm").children([
        Element::input("text").id("name").name("name").required(),
        Element::input("email").id("email").name("email").required(),
        Element::input("tel").id("phone").name("phone"),
        Element::textarea().id("message").name("message").required(),
        Element::button("Envoyer le message")
            .id("submit")
            .attr("type", "submit"),
    ]);

    let body = Element::body().id("body").children([
        header,
        Element::section()
            .id("services")
            .class("scroll-animate")
            .layout(900, 600),
        Element::section()
            .id("contact")
            .class("scroll-animate")
            .layout(1600, 700)
            .child(form),
    ]);

    Document::new(Element::html().id("page").child(body))
}
