use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::web_sys::{KeyboardEvent, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::content::{section_content, SectionId, README};
use crate::markdown::render_markdown;
use crate::view_state::{ScrollMetrics, ViewAction, ViewState};

fn read_scroll_metrics() -> ScrollMetrics {
    let win = window();
    let document_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    ScrollMetrics::new(
        win.scroll_y().unwrap_or_default(),
        document_height,
        viewport_height,
    )
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let (state, set_state) = signal(ViewState::default());

    let dispatch = move |action: ViewAction| {
        if !matches!(action, ViewAction::Scrolled(_)) {
            log!("view action: {action:?}");
        }
        set_state.maybe_update(|s| s.apply(action));
    };

    Effect::new(move |_| dispatch(ViewAction::Mounted));

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        dispatch(ViewAction::Scrolled(read_scroll_metrics()));
    });
    let key_handle = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
        if e.key() == "Escape" && state.with_untracked(|s| s.video_open) {
            dispatch(ViewAction::CloseVideo);
        }
    });
    on_cleanup(move || {
        scroll_handle.remove();
        key_handle.remove();
    });

    // Re-render only when the section changes, not on every scroll tick.
    let active_section = Memo::new(move |_| state.with(|s| s.active_section.clone()));
    let content_html =
        Memo::new(move |_| active_section.with(|id| render_markdown(&section_content(README, id))));

    let is_visible = move || state.with(|s| s.is_visible);
    let threshold = config.back_to_top_threshold;
    let theme_style = config.theme.css_variables();

    let nav_items = SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <button
                        class=move || if state.with(|s| s.is_active(section)) { "nav-active" } else { "" }
                        on:click=move |_| dispatch(ViewAction::SelectSection(section.as_str().to_string()))
                    >
                        {section.label()}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let tech_stack = config
        .tech_stack
        .iter()
        .map(|tech| view! { <span>{tech.clone()}</span> })
        .collect::<Vec<_>>();

    let video_src = config.video_src.clone();

    view! {
        <div class="app" style=theme_style>
            <div class="progress-bar-container">
                <div
                    class="progress-bar"
                    style=move || format!("width: {}%;", state.with(|s| s.scroll_progress))
                ></div>
            </div>

            <section class="hero-section">
                <div class="video-background">
                    <div class="video-overlay"></div>
                </div>
                <div class="hero-content">
                    <div class=move || if is_visible() { "hero-text fade-in" } else { "hero-text" }>
                        <h1 class="hero-title">
                            <span class="gradient-text">{config.project_name.clone()}</span>
                            <br/>
                            <span class="ai-text">{config.tagline.clone()}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {config.subtitle.clone()}
                            <br/>
                            <span class="highlight">{config.highlight.clone()}</span>
                        </p>

                        <div class="cta-buttons">
                            <a
                                href=config.repository_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="primary-button pulse"
                            >
                                <span>"🌟 View on GitHub"</span>
                            </a>
                            <button
                                class="secondary-button"
                                on:click=move |_| dispatch(ViewAction::SelectSection(SectionId::Features.as_str().to_string()))
                            >
                                "Explore Features"
                            </button>
                        </div>

                        <div class="video-preview-container">
                            <div class="video-preview">
                                <img
                                    src=config.thumbnail_src.clone()
                                    alt=format!("{} Demo", config.project_name)
                                    class="video-thumbnail"
                                />
                                <button
                                    class="play-button"
                                    title="Play demo"
                                    on:click=move |_| dispatch(ViewAction::OpenVideo)
                                >
                                    "▶"
                                </button>
                            </div>
                            <p class="video-caption">{config.video_caption.clone()}</p>
                        </div>
                    </div>
                </div>
            </section>

            <nav class="floating-nav">
                <div class="nav-container">
                    <div class="nav-logo">{config.logo_text.clone()}</div>
                    <ul class="nav-links">{nav_items}</ul>
                </div>
            </nav>

            <main class="content-wrapper">
                <div class="content-container">
                    <div
                        class=move || if is_visible() { "markdown-content slide-up" } else { "markdown-content" }
                        inner_html=move || content_html.get()
                    ></div>
                </div>
            </main>

            <button
                class=move || {
                    if state.with(|s| s.back_to_top_visible(threshold)) { "back-to-top visible" } else { "back-to-top" }
                }
                title="Back to top"
                on:click=move |_| scroll_to_top()
            >
                "↑"
            </button>

            <Show when=move || state.with(|s| s.video_open)>
                <div class="video-modal-backdrop" on:click=move |_| dispatch(ViewAction::CloseVideo)></div>
                <video
                    class="video-modal"
                    src=video_src.clone()
                    controls=true
                    loop=true
                    autoplay=true
                ></video>
            </Show>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-info">
                        <h3>{config.full_name()}</h3>
                        <p>"AI-powered deployment automation tool"</p>
                        <div class="tech-stack">{tech_stack}</div>
                    </div>
                    <div class="footer-links">
                        <a
                            href=config.repository_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="github-footer-link"
                        >
                            "GitHub Repository"
                        </a>
                        <p class="copyright">{config.copyright.clone()}</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}
