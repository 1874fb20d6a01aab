//! Static content sections: about, skills, education, contact.
//!
//! These carry the anchors the scrollspy tracks and the classes the
//! scroll-reveal observer animates; their content is plain markup.

use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <h2 class="section-title">"About"</h2>
            <div class="about-content">
                <p>
                    "I build web applications end to end, with a soft spot for \
                     the unglamorous parts: tooling, performance, and the last \
                     10% of polish. Away from the keyboard I hike and take \
                     photos of mountains I then fail to identify."
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    const GROUPS: [(&str, &str); 3] = [
        ("Languages", "Rust, TypeScript, SQL"),
        ("Frontend", "Leptos, WebAssembly, CSS"),
        ("Infrastructure", "Linux, PostgreSQL, CI pipelines"),
    ];

    let groups = GROUPS
        .iter()
        .map(|&(name, items)| {
            view! {
                <div class="skill-category">
                    <h3>{name}</h3>
                    <p>{items}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="section">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">{groups}</div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section">
            <h2 class="section-title">"Education"</h2>
            <div class="education-card">
                <h3>"B.Sc. Computer Science"</h3>
                <p>"Kyiv Polytechnic Institute"</p>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <h2 class="section-title">"Contact"</h2>
            <div class="contact-item">
                <a class="contact-link" href="mailto:hello@example.dev">"hello@example.dev"</a>
            </div>
            <div class="contact-item">
                <a class="contact-link" href="https://github.com/" rel="noreferrer">"GitHub"</a>
            </div>
        </section>
    }
}
