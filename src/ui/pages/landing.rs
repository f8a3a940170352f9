//! Landing page component
//!
//! A scroll-driven landing page for the Relay meeting assistant featuring:
//! - Navbar that hides while scrolling down
//! - Hero section
//! - Product tour with a progress line that lights up each step
//! - Live transcript that types itself out once it scrolls into view
//! - Broadcast section where scrolling pauses while the messages play through
//! - Closing call-to-action and footer
//!
//! The server renders the markup; after hydration the scroll driver attaches
//! to the `data-gate` elements and animates them.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::config::GateConfig;
use crate::core::render::ElementId;
use crate::core::state::MessageState;
use crate::ui::icon::{Icon, icons};

/// Steps shown beside the tour line
const TOUR_STEPS: [(&str, &str); 3] = [
    (
        "Invite Relay",
        "Add the assistant to any calendar invite. It joins on time, every time.",
    ),
    (
        "Talk as usual",
        "Relay listens quietly and keeps track of who said what.",
    ),
    (
        "Read the summary",
        "Decisions and action items land in your inbox before the next meeting starts.",
    ),
];

/// Lines of the simulated transcript
struct TranscriptLine {
    speaker: &'static str,
    time: &'static str,
    text: &'static str,
    from_assistant: bool,
}

const fn line(speaker: &'static str, time: &'static str, text: &'static str) -> TranscriptLine {
    TranscriptLine {
        speaker,
        time,
        text,
        from_assistant: false,
    }
}

const fn note(time: &'static str, text: &'static str) -> TranscriptLine {
    TranscriptLine {
        speaker: "Relay",
        time,
        text,
        from_assistant: true,
    }
}

const TRANSCRIPT: [TranscriptLine; 10] = [
    line("Amara", "10:02 AM", "Morning all. Let's start with where the launch stands."),
    line("Jonas", "10:02 AM", "Docs are done. The pricing page still needs a final review."),
    note("10:03 AM", "Recording started. Three participants on the call."),
    line("Priya", "10:03 AM", "Support is trained on the new plans. Macros go live tomorrow."),
    line("Amara", "10:04 AM", "Good. Jonas, can you own the pricing review by Thursday?"),
    line("Jonas", "10:04 AM", "Yes, I'll send it round Wednesday evening."),
    note("10:05 AM", "Action item: pricing page review, owner Jonas, due Thursday."),
    line("Priya", "10:05 AM", "One risk: the migration email still links to the old help center."),
    line("Amara", "10:06 AM", "Let's fix that before anything else goes out."),
    note("10:06 AM", "Summary ready. Two action items, one open risk."),
];

/// Landing page with the scroll gate
#[component]
pub fn LandingPage(config: GateConfig) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::ui::driver::{PageLayout, ScrollDriver};

        let driver = StoredValue::new_local(None::<ScrollDriver>);
        let gate_config = config.clone();

        Effect::new(move |_| {
            if driver.with_value(Option::is_none) {
                let layout = PageLayout {
                    tour_steps: TOUR_STEPS.len(),
                    transcript: TRANSCRIPT.iter().map(|l| l.text.to_string()).collect(),
                };
                driver.set_value(ScrollDriver::start(gate_config.clone(), layout));
            }
        });

        on_cleanup(move || {
            let _ = driver.try_update_value(Option::take);
        });
    }

    let messages = config.messages.clone();

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="landing">
            <Navbar />

            // Hero Section
            <section class="hero">
                <div class="container hero-content">
                    <h1 class="hero-title landing-fade-in-up">"Every meeting, remembered."</h1>
                    <p class="hero-lead landing-fade-in-up landing-delay-200">
                        "Relay joins your calls, writes everything down and hands you the summary when you hang up."
                    </p>
                    <div class="hero-actions landing-fade-in-up landing-delay-400">
                        <a href="#broadcast" class="btn-primary">
                            "See it live"
                            <Icon name=icons::ARROW_RIGHT />
                        </a>
                        <a href="#tour" class="btn-secondary">"How it works"</a>
                    </div>
                </div>

                // Scroll indicator
                <div class="hero-scroll-hint">
                    <Icon name=icons::CHEVRON_DOWN />
                </div>
            </section>

            <TourSection />
            <TranscriptSection />
            <BroadcastSection messages=messages />

            // Call to action
            <section class="section closing">
                <div class="container reveal-on-scroll">
                    <h2 class="section-title">"Stop taking notes."</h2>
                    <p class="section-lead">"Relay works with the meeting tools you already use."</p>
                    <div class="closing-actions">
                        <a href="#broadcast" class="btn-primary">"Watch again"</a>
                    </div>
                </div>
            </section>

            <Footer />
        </div>

        <ScrollAnimationScript />
    }
}

/// Fixed navbar, classes driven by scroll position
#[component]
fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar show-down" data-gate=ElementId::Navbar.to_string()>
            <div class="container navbar-inner">
                <a href="/" class="navbar-brand">
                    <Logo />
                    <span>"Relay"</span>
                </a>
                <nav class="navbar-links">
                    <a href="#tour">"How it works"</a>
                    <a href="#broadcast">"Live demo"</a>
                </nav>
            </div>
        </header>
    }
}

/// Product tour with the progress line
#[component]
fn TourSection() -> impl IntoView {
    view! {
        <section id="tour" class="section tour">
            <div class="container">
                <h2 class="section-title reveal-on-scroll">"How it works"</h2>
                <p class="section-lead reveal-on-scroll">"Three steps, no setup."</p>

                <div class="tour-grid">
                    <div class="tour-line" data-gate=ElementId::TourLine.to_string()>
                        <div class="tour-segment" data-gate=ElementId::TourSegment.to_string()></div>
                    </div>
                    <div class="tour-icon" data-gate=ElementId::TourIcon.to_string()>
                        <Icon name=icons::DOCUMENT_TEXT />
                    </div>
                    <div class="tour-steps">
                        {TOUR_STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, (title, body))| {
                                view! {
                                    <div class="tour-box" data-gate=ElementId::TourBox(index).to_string()>
                                        <span class="tour-step-number">{index + 1}</span>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Transcript box; lines are rendered hidden and typed out after hydration
#[component]
fn TranscriptSection() -> impl IntoView {
    view! {
        <section id="transcript" class="section transcript-section">
            <div class="container">
                <h2 class="section-title reveal-on-scroll">"Every word, as it's said"</h2>
                <p class="section-lead reveal-on-scroll">
                    "Relay writes the transcript live and flags what matters."
                </p>

                <div class="transcript" data-gate=ElementId::Transcript.to_string()>
                    {TRANSCRIPT
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let class = if entry.from_assistant {
                                "transcript-line assistant"
                            } else {
                                "transcript-line"
                            };
                            view! {
                                <div class=class data-gate=ElementId::TranscriptLine(index).to_string()>
                                    <div class="transcript-header">
                                        <span class="transcript-speaker">{entry.speaker}</span>
                                        <span class="transcript-time">{entry.time}</span>
                                    </div>
                                    <p
                                        class="transcript-text"
                                        data-gate=ElementId::TranscriptText(index).to_string()
                                    >
                                        {entry.text}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Line with the indicator, the paused message list and the action panel
#[component]
fn BroadcastSection(messages: Vec<String>) -> impl IntoView {
    view! {
        <section id="broadcast" class="section broadcast">
            <div class="container broadcast-grid">
                <div class="broadcast-track">
                    <div class="broadcast-line" data-gate=ElementId::Line.to_string()>
                        <div class="broadcast-indicator" data-gate=ElementId::Indicator.to_string()></div>
                    </div>
                </div>

                <div class="broadcast-panels">
                    <div class="message-panel" data-gate=ElementId::MessagePanel.to_string()>
                        <p class="message-panel-label">"Live"</p>
                        <ol class="gate-messages">
                            {messages
                                .into_iter()
                                .enumerate()
                                .map(|(index, text)| {
                                    // First message starts active, matching the initial gate state
                                    let state = MessageState::for_index(index, 0);
                                    view! {
                                        <li
                                            class=format!("gate-message {}", state.class())
                                            data-gate=ElementId::Message(index).to_string()
                                        >
                                            <Icon name=icons::CHECK class="gate-message-check" />
                                            <span>{text}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </div>

                    <div class="action-panel" data-gate=ElementId::ActionPanel.to_string()>
                        <h3>"Your summary is ready"</h3>
                        <p>"Decisions, owners and deadlines, pulled from the conversation."</p>
                        <a href="#tour" class="btn-primary">
                            "Open the summary"
                            <Icon name=icons::ARROW_RIGHT />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Relay - Meeting notes that write themselves" />
        <Meta name="description" content="Relay joins your meetings, transcribes every voice and sends the summary when you hang up." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Relay - Meeting notes that write themselves" />
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M12 3v18M7 8v8M17 8v8M2 11v2M22 11v2" />
            </svg>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <span>"© 2026 Relay. Built with Rust & Leptos."</span>
                <nav class="footer-links">
                    <a href="#tour">"How it works"</a>
                    <a href="#broadcast">"Live demo"</a>
                </nav>
            </div>
        </footer>
    }
}

/// CSS for the scroll-driven elements
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Navbar */
            .navbar {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                transition: transform 0.3s ease, background 0.3s ease;
            }
            .navbar-inner {
                display: flex;
                align-items: center;
                justify-content: space-between;
                height: 4rem;
            }
            .navbar-brand {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                font-weight: 700;
                font-size: 1.25rem;
            }
            .navbar-links {
                display: flex;
                gap: 1.5rem;
                color: var(--text-secondary);
                font-size: 0.875rem;
            }
            .navbar.scrolled {
                background: rgba(11, 13, 18, 0.85);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid var(--border);
            }
            .navbar.hide-up { transform: translateY(-100%); }
            .navbar.show-down { transform: translateY(0); }

            .logo {
                width: 2.25rem;
                height: 2.25rem;
                display: flex;
                align-items: center;
                justify-content: center;
                border-radius: 0.75rem;
                background: linear-gradient(135deg, var(--accent), #2563eb);
            }

            /* Hero */
            .hero {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                position: relative;
                text-align: center;
            }
            .hero-title {
                font-size: clamp(2.5rem, 6vw, 4.5rem);
                font-weight: 700;
                margin: 0 0 1.5rem;
                letter-spacing: -0.02em;
            }
            .hero-lead {
                font-size: 1.25rem;
                color: var(--text-secondary);
                max-width: 40rem;
                margin: 0 auto 2.5rem;
            }
            .hero-actions {
                display: flex;
                gap: 1rem;
                justify-content: center;
                flex-wrap: wrap;
            }
            .hero-scroll-hint {
                position: absolute;
                bottom: 2rem;
                left: 50%;
                transform: translateX(-50%);
                opacity: 0.6;
            }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.6s ease-out forwards; }
            .landing-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .landing-delay-400 { animation-delay: 0.4s; opacity: 0; }

            /* Reveal on scroll */
            .reveal-on-scroll {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal-on-scroll.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Tour line */
            .tour-grid {
                display: grid;
                grid-template-columns: 4px 1fr;
                gap: 3rem;
                max-width: 48rem;
                margin: 0 auto;
            }
            .tour-line {
                position: relative;
                background: var(--border);
                border-radius: 2px;
            }
            .tour-segment {
                position: absolute;
                top: 0;
                left: 0;
                width: 4px;
                height: 50px;
                border-radius: 2px;
                background: var(--accent);
                will-change: transform;
            }
            .tour-steps {
                display: flex;
                flex-direction: column;
                gap: 12rem;
                padding: 6rem 0;
            }
            .tour-box {
                padding: 1.5rem;
                border: 1px solid var(--border);
                border-radius: 1rem;
                background: var(--bg-secondary);
                opacity: 0.45;
                transition: opacity 0.3s ease, border-color 0.3s ease;
            }
            .tour-box.active {
                opacity: 1;
                border-color: var(--accent);
            }
            .tour-step-number {
                color: var(--accent);
                font-weight: 700;
            }
            .tour-grid { position: relative; }
            .tour-icon {
                position: absolute;
                left: 50%;
                bottom: 2rem;
                width: 2.5rem;
                height: 2.5rem;
                display: flex;
                align-items: center;
                justify-content: center;
                border-radius: 50%;
                background: var(--accent);
                opacity: 0;
                transform: translateX(-500px);
                will-change: transform, opacity;
            }
            .tour-icon.visible { box-shadow: 0 0 24px var(--accent); }

            /* Transcript */
            .transcript {
                max-width: 40rem;
                height: 24rem;
                margin: 0 auto;
                padding: 1.5rem;
                overflow-y: auto;
                border: 1px solid var(--border);
                border-radius: 1rem;
                background: var(--bg-secondary);
            }
            .transcript-line {
                display: none;
                margin-bottom: 1rem;
                opacity: 0;
                transform: translateY(12px);
                transition: opacity 0.3s ease, transform 0.3s ease;
            }
            .transcript-line.shown { display: block; }
            .transcript-line.visible {
                opacity: 1;
                transform: translateY(0);
            }
            .transcript-header {
                display: flex;
                gap: 0.75rem;
                font-size: 0.8125rem;
            }
            .transcript-speaker { font-weight: 600; }
            .transcript-time { color: var(--text-tertiary); }
            .transcript-line.assistant .transcript-speaker { color: var(--accent); }
            .transcript-text { margin: 0.25rem 0 0; color: var(--text-secondary); }
            .transcript-text.typing::after {
                content: "|";
                margin-left: 2px;
                animation: transcript-caret 1s step-end infinite;
            }
            @keyframes transcript-caret { 50% { opacity: 0; } }

            /* Broadcast */
            .broadcast-grid {
                display: grid;
                grid-template-columns: 4px 1fr;
                gap: 3rem;
            }
            .broadcast-line {
                position: relative;
                height: 1400px;
                width: 4px;
                background: linear-gradient(var(--border), var(--accent), var(--border));
                border-radius: 2px;
            }
            .broadcast-indicator {
                position: absolute;
                top: 0;
                left: -8px;
                width: 20px;
                height: 20px;
                border-radius: 50%;
                background: var(--accent);
                box-shadow: 0 0 24px var(--accent);
                opacity: 0;
                will-change: transform, opacity;
            }
            .broadcast-panels {
                position: sticky;
                top: 30vh;
                align-self: start;
            }
            .message-panel {
                opacity: 0;
                transform: translateY(40px);
                will-change: transform, opacity;
            }
            .message-panel-label {
                text-transform: uppercase;
                letter-spacing: 0.1em;
                font-size: 0.75rem;
                color: var(--accent);
                margin: 0 0 1rem;
            }
            .gate-messages {
                list-style: none;
                margin: 0;
                padding: 0;
            }
            .gate-message {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                height: 60px;
                font-size: 1.25rem;
                transition: opacity 0.3s ease, color 0.3s ease;
            }
            .gate-message.pending { opacity: 0.3; }
            .gate-message.active { opacity: 1; color: var(--text-primary); }
            .gate-message.completed { opacity: 0.6; color: var(--text-secondary); }
            .gate-message-check {
                width: 1.25rem;
                height: 1.25rem;
                visibility: hidden;
            }
            .gate-message.completed .gate-message-check { visibility: visible; }

            .action-panel {
                margin-top: 2rem;
                padding: 1.5rem;
                border-radius: 1rem;
                border: 1px solid var(--border);
                background: var(--bg-secondary);
                opacity: 0;
                transform: translateY(40px);
                pointer-events: none;
                transition: opacity 0.4s ease, transform 0.4s ease;
            }
            .action-panel.visible { pointer-events: auto; }

            .closing-actions { display: flex; justify-content: center; }
            .footer-inner {
                display: flex;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 1rem;
            }
            .footer-links { display: flex; gap: 1.5rem; }
            "#
        </style>
    }
}

/// Script for scroll-triggered reveal using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.reveal-on-scroll').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
