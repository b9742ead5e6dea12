//! Landing page markup.
//!
//! Server-rendered with no scripts: the waitlist form posts to `/waitlist`
//! and the response is this same page in its `success` or `error` state.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::display::{progress_percent, spots_label};
use super::status::FormStatus;

/// Training stages offered in the form, as (value, label)
pub const STAGES: [(&str, &str); 4] = [
    ("building", "Building base"),
    ("intensifying", "Intensifying"),
    ("peaking", "Peaking"),
    ("recovering", "Recovering"),
];

const PILLARS: [&str; 3] = ["Vision → Joints", "Wearables → Recovery", "AI → Coaching"];

const STEPS: [(&str, &str, &str); 3] = [
    ("🎥", "Capture", "Film key movements with your phone."),
    ("🧬", "Fuse", "Combine biomechanics with wearable signals."),
    ("✨", "Personalize", "Get coaching tuned to your training stage."),
];

const INSIGHTS: [&str; 3] = [
    "Detect form breakdown before it becomes injury.",
    "Tie fatigue + recovery to movement quality.",
    "Stage-aware cues that evolve with you.",
];

const INTEGRATIONS: [&str; 3] = ["Apple Watch", "WHOOP", "Oura"];

/// Everything the page needs to render
#[derive(Debug, Clone)]
pub struct PageView {
    /// Form state
    pub status: FormStatus,

    /// Signups so far, `None` when unknown
    pub count: Option<u64>,

    /// Founding spots
    pub capacity: u64,
}

/// Render the landing page.
pub fn render_landing(view: &PageView) -> Markup {
    let percent = view.count.map(|c| progress_percent(view.capacity, c)).unwrap_or(0);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Kinetic | The Future of Fitness" }
                meta name="description" content="Kinetic fuses phone-camera biomechanics with wearable biometrics to create movement intelligence.";
                meta property="og:title" content="Kinetic";
                meta property="og:type" content="website";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class="page" {
                    header class="topbar" {
                        div class="brand" { "Kinetic" }
                        div class="pill" { "Private beta" }
                    }

                    section class="hero" {
                        div class="hero-copy" {
                            div class="pill glow" { "The Future of Fitness" }
                            h1 { "The Future of Fitness." }
                            p class="lede" {
                                "Kinetic fuses phone-camera biomechanics with wearable biometrics "
                                "to create movement intelligence—real coaching, in real time."
                            }

                            (waitlist_card(&view.status))

                            div class="offer" { "Founding " (view.capacity) " get 3 months free + priority onboarding" }
                            div class="spots" id="spots" { (spots_label(view.capacity, view.count)) }
                            div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(percent) {
                                div class="progress-fill" style=(format!("width:{}%", percent)) {}
                            }
                        }
                        div class="hero-visual" aria-hidden="true" {
                            div class="orb" {}
                        }
                    }

                    section class="pillars" {
                        @for pillar in PILLARS {
                            div class="card pillar" { (pillar) }
                        }
                    }

                    section class="card" {
                        h2 { "How it works" }
                        div class="steps" {
                            @for (icon, title, text) in STEPS {
                                div class="step" {
                                    div class="step-head" {
                                        span class="step-icon" { (icon) }
                                        div class="step-title" { (title) }
                                    }
                                    p { (text) }
                                }
                            }
                        }
                    }

                    section class="card" {
                        h2 { "Movement Intelligence" }
                        ul class="insights" {
                            @for insight in INSIGHTS {
                                li { (insight) }
                            }
                        }
                    }

                    section class="integrations" {
                        h2 { "Integrates with" }
                        div class="integration-list" {
                            @for name in INTEGRATIONS {
                                span class="pill" { (name) }
                            }
                        }
                    }

                    footer class="footer" {
                        div class="brand" { "Kinetic" }
                        p { "Movement intelligence engineered for the next era of training." }
                    }
                }
            }
        }
    }
}

fn waitlist_card(status: &FormStatus) -> Markup {
    let submitting = matches!(status, FormStatus::Submitting);

    html! {
        div class="card waitlist" id="waitlist" {
            div class="waitlist-head" {
                div {
                    h2 { "Join the waitlist" }
                    p class="muted" { "Early access is limited. We’ll reach out with next steps." }
                }
            }

            @if status.shows_form() {
                form class="waitlist-form" method="post" action="/waitlist" {
                    label {
                        "Email"
                        input type="email" name="email" required placeholder="you@domain.com";
                    }
                    label {
                        "Training stage (optional)"
                        select name="stage" {
                            option value="" selected { "Select a stage" }
                            @for (value, label) in STAGES {
                                option value=(value) { (label) }
                            }
                        }
                    }
                    button type="submit" disabled[submitting] {
                        @if submitting { "Submitting..." } @else { "Get Early Access" }
                    }
                    @if let Some(message) = status.error_message() {
                        p class="form-error" role="alert" { (message) }
                    }
                }
            } @else {
                div class="confirmation" role="status" {
                    div class="check" { "✓" }
                    h2 { "You’re on the list" }
                    p class="muted" { "Thanks for joining. We’ll be in touch with your onboarding window soon." }
                }
            }
        }
    }
}

const PAGE_CSS: &str = r#"
:root{--bg:#000810;--text:#eafbff;--muted:rgba(234,251,255,.68);--cyan-0:#7ff6ff;--cyan-1:#00e0e0;--edge:rgba(0,224,224,.35);--panel:rgba(0,16,32,.7)}
*{box-sizing:border-box;margin:0}
body{min-height:100vh;background:radial-gradient(circle at 20% 0%,rgba(0,224,224,.12),transparent 45%),var(--bg);color:var(--text);font-family:system-ui,-apple-system,"Segoe UI",sans-serif;line-height:1.5}
.page{max-width:72rem;margin:0 auto;padding:2.5rem 1.5rem 5rem;display:flex;flex-direction:column;gap:3rem}
.topbar,.footer{display:flex;align-items:center;justify-content:space-between}
.brand{font-weight:600;letter-spacing:.24em;color:var(--cyan-1)}
.pill{display:inline-flex;width:fit-content;border:1px solid var(--edge);background:var(--panel);border-radius:999px;padding:.25rem .75rem;font-size:.75rem;text-transform:uppercase;letter-spacing:.2em;color:var(--cyan-0)}
.glow{box-shadow:0 0 18px rgba(0,224,224,.18);text-transform:none;letter-spacing:normal}
.hero{display:grid;gap:2.5rem;align-items:center}
@media(min-width:768px){.hero{grid-template-columns:1.05fr .95fr}}
.hero-copy{display:flex;flex-direction:column;gap:1.5rem}
h1{font-size:clamp(2.25rem,5vw,3rem);font-weight:600;line-height:1.1}
h2{font-size:1.125rem;font-weight:600}
.lede,.muted{color:var(--muted)}
.card{border:1px solid var(--edge);background:var(--panel);border-radius:1rem;padding:1.25rem;backdrop-filter:blur(12px)}
.waitlist-form{display:flex;flex-direction:column;gap:1rem;margin-top:1rem}
.waitlist-form label{display:flex;flex-direction:column;gap:.5rem;font-size:.875rem;color:rgba(234,251,255,.7)}
input,select{background:rgba(0,8,16,.9);border:1px solid var(--edge);border-radius:.75rem;padding:.75rem 1rem;color:var(--text);font:inherit}
button{border:0;border-radius:.75rem;padding:.75rem 1rem;background:var(--cyan-1);color:#001018;font-weight:600;cursor:pointer}
button:disabled{opacity:.6;cursor:wait}
.form-error{color:#ff8a8a;font-size:.875rem}
.confirmation{display:flex;flex-direction:column;align-items:center;gap:.5rem;text-align:center;padding:1.5rem 0}
.check{width:3rem;height:3rem;border-radius:999px;display:grid;place-items:center;background:rgba(0,224,224,.15);color:var(--cyan-1);font-size:1.5rem}
.offer{font-size:.875rem;color:var(--cyan-0)}
.spots{font-size:.875rem;color:var(--muted)}
.progress{height:.5rem;border-radius:999px;background:rgba(0,224,224,.12);overflow:hidden}
.progress-fill{height:100%;background:linear-gradient(90deg,var(--cyan-1),var(--cyan-0))}
.hero-visual{display:grid;place-items:center;min-height:22rem}
.orb{width:18rem;height:18rem;border-radius:999px;background:radial-gradient(circle at 35% 35%,var(--cyan-0),rgba(0,224,224,.2) 55%,transparent 70%);box-shadow:0 0 80px rgba(0,224,224,.35)}
.pillars{display:grid;gap:1rem}
@media(min-width:768px){.pillars{grid-template-columns:repeat(3,1fr)}}
.pillar{text-align:center;font-weight:600}
.steps{display:grid;gap:1rem;margin-top:1rem}
@media(min-width:768px){.steps{grid-template-columns:repeat(3,1fr)}}
.step-head{display:flex;align-items:center;gap:.5rem;font-weight:600}
.step p{color:var(--muted);margin-top:.5rem}
.insights{list-style:none;padding:0;margin-top:1rem;display:flex;flex-direction:column;gap:.75rem}
.insights li::before{content:"";display:inline-block;width:.5rem;height:.5rem;border-radius:999px;background:var(--cyan-1);margin-right:.75rem}
.integrations{display:flex;flex-direction:column;gap:1rem;align-items:center}
.integration-list{display:flex;gap:.75rem;flex-wrap:wrap;justify-content:center}
.footer p{color:var(--muted);font-size:.875rem}
"#;
