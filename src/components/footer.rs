use maud::{html, Markup, Render};

pub const COPYRIGHT: &str = "© 2024 Company, Inc. All rights reserved.";

/// (test id, href, label)
pub const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("link-facebook", "https://facebook.com", "Facebook"),
    ("link-x", "https://x.com", "X"),
    ("link-instagram", "https://instagram.com", "Instagram"),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct Footer;

impl Render for Footer {
    fn render(&self) -> Markup {
        html! {
            footer class="d-flex flex-wrap justify-content-between align-items-center py-3 my-4 border-top" {
                p class="col-md-4 mb-0 text-body-secondary" data-testid="footer-text" { (COPYRIGHT) }
                ul class="nav col-md-4 justify-content-end list-unstyled d-flex" {
                    @for (test_id, href, label) in SOCIAL_LINKS {
                        li class="ms-3" {
                            a class="text-body-secondary" data-testid=(test_id) href=(href) aria-label=(label) {
                                (label)
                            }
                        }
                    }
                }
            }
        }
    }
}
