//! Landing page component
//!
//! Single-page marketing site for the Z Image API:
//! - SEO meta tags and JSON-LD structured data
//! - Hero with animated statistics
//! - Features, live demo, tutorial and Python guide
//! - Use cases, comparison table and pricing
//! - Waitlist sign-up with social-proof counter
//! - FAQ, GitHub call-to-action and footer

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::landing::{
    REVEAL_OBSERVER, SITE_DESCRIPTION, SITE_KEYWORDS, SITE_URL, ScrollHint, WAITLIST_OBSERVER,
    faq_item_style, page_title, reveal_style, structured_data, use_case_delay,
};
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::copy_button::CodeBlock;
use crate::ui::counter::{HeroStats, WaitlistCounter};
use crate::ui::icon::{Icon, icons};
use crate::ui::lifecycle::use_page_lifecycle;
use crate::ui::navbar::{Navbar, use_link_handlers};
use crate::ui::pricing::PricingSection;
use crate::ui::reveal::{Reveal, Section, provide_active_section, use_revealed};
use crate::ui::waitlist::WaitlistForm;

const GITHUB_URL: &str = "https://github.com/Tongyi-MAI/Z-Image";

const HERO_STATS: &[(&str, &str)] = &[
    ("6B", "Parameters"),
    ("< 1s", "Generation time"),
    ("100%", "Open source"),
];

const INSTALL_SNIPPET: &str = "pip install zimage";

const QUICKSTART_SNIPPET: &str = r#"from zimage import ZImage

client = ZImage(api_key="YOUR_API_KEY")

image = client.generate(
    prompt="A lighthouse on a cliff at sunset, oil painting",
    width=1024,
    height=1024,
)
image.save("lighthouse.png")"#;

const BATCH_SNIPPET: &str = r#"prompts = [
    "A red fox in fresh snow",
    "Neon city street in the rain",
]

for i, image in enumerate(client.generate_batch(prompts)):
    image.save(f"batch_{i}.png")"#;

const ASYNC_SNIPPET: &str = r#"import asyncio
from zimage import AsyncZImage

async def main():
    client = AsyncZImage(api_key="YOUR_API_KEY")
    image = await client.generate(prompt="Isometric cozy cabin")
    image.save("cabin.png")

asyncio.run(main())"#;

const CURL_SNIPPET: &str = r#"curl -X POST https://api.zimageapi.com/v1/generate \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{"prompt": "A lighthouse on a cliff at sunset"}'"#;

const FEATURES: &[(&str, &str)] = &[
    ("Lightning Fast", "Sub-second generation on a single consumer GPU."),
    ("Open Source", "Weights and code on GitHub under a permissive license."),
    ("Python First", "A typed SDK with sync and async clients."),
    ("Bilingual Prompts", "Understands and renders English and Chinese text."),
    ("Self-Host or API", "Run it on your own hardware or call the hosted API."),
    ("Photorealistic", "Sharp detail and faithful prompt following."),
];

const USE_CASES: &[(&str, &str)] = &[
    ("E-commerce", "Product shots and lifestyle images at catalog scale."),
    ("Marketing", "Campaign visuals and social assets in minutes."),
    ("Game Development", "Concept art, textures and item icons."),
    ("Content Creation", "Blog headers, thumbnails and illustrations."),
    ("Research", "A reproducible open model for experiments."),
    ("Prototyping", "Mockups and storyboards without a designer."),
];

const COMPARISON: &[(&str, &str, &str, &str)] = &[
    ("Open source", "Yes", "No", "Partial"),
    ("Self-hosting", "Yes", "No", "Yes"),
    ("Generation time", "< 1s", "5-15s", "3-8s"),
    ("Python SDK", "Yes", "Yes", "Community"),
    ("Price per image", "$0.0015", "$0.04", "$0.01"),
];

const FAQS: &[(&str, &str)] = &[
    (
        "What is Z Image API?",
        "A fast, open-source text-to-image model with a hosted API and a Python SDK.",
    ),
    (
        "Is it really free?",
        "The model weights are free to self-host. The hosted API is pay-per-image with a free starter allowance.",
    ),
    (
        "What hardware do I need to self-host?",
        "A single GPU with 16 GB of memory runs the model comfortably.",
    ),
    (
        "When does the hosted API launch?",
        "Early access opens in waves. Join the waitlist and we'll email you when your spot is ready.",
    ),
    (
        "Can I use generated images commercially?",
        "Yes. Images you generate are yours to use, including in commercial products.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_active_section();
    use_link_handlers();
    use_page_lifecycle();

    let waitlist_seen = RwSignal::new(false);

    view! {
        <SeoMeta />

        <Navbar />

        // Hero Section
        <section class="hero">
            <div class="container hero-content">
                <span class="hero-badge">"Open source · Python ready"</span>
                <h1 class="hero-title">
                    "Z Image API"
                    <span class="gradient-text">" Advanced AI Image Generation"</span>
                </h1>
                <p class="hero-subtitle">{SITE_DESCRIPTION}</p>
                <div class="hero-cta">
                    <LinkButton href="#waitlist" size=ButtonSize::Large icon=icons::ARROW_RIGHT>
                        "Join the Waitlist"
                    </LinkButton>
                    <LinkButton
                        href=GITHUB_URL
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Large
                        icon=icons::GITHUB
                        external=true
                    >
                        "View on GitHub"
                    </LinkButton>
                </div>
                <HeroStats stats=HERO_STATS />
            </div>
        </section>

        // Features Section
        <Section id="features" class="features">
            <div class="container">
                <SectionHeader
                    title="Why Z Image API?"
                    subtitle="Everything you need to generate production images from code."
                />
                <div class="features-grid">
                    {FEATURES.iter().map(|(title, description)| view! {
                        <Reveal class="feature-card">
                            <Icon name=icons::LIGHTNING class="feature-icon"/>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </Section>

        // Demo Section
        <Section id="demo" class="demo">
            <div class="container">
                <SectionHeader
                    title="See It in Action"
                    subtitle="One request, one image. No queues, no prompt gymnastics."
                />
                <div class="demo-container">
                    <div class="demo-prompt">
                        <span class="demo-label">"Prompt"</span>
                        <p>"A lighthouse on a cliff at sunset, oil painting"</p>
                    </div>
                    <img
                        class="demo-output"
                        data-src="/images/demo-lighthouse.webp"
                        alt="Generated image of a lighthouse on a cliff at sunset"
                        width="512"
                        height="512"
                    />

                    <CodeBlock language="bash" code=CURL_SNIPPET />
                </div>
            </div>
        </Section>

        // Tutorial Section
        <Section id="tutorial" class="tutorial">
            <div class="container">
                <SectionHeader
                    title="Get Started in Minutes"
                    subtitle="Install the SDK, add your key and generate your first image."
                />
                <div class="tutorial-steps">
                    <Reveal class="tutorial-step">
                        <span class="step-number">"1"</span>
                        <h3>"Install the SDK"</h3>
                        <CodeBlock language="bash" code=INSTALL_SNIPPET />
                    </Reveal>
                    <Reveal class="tutorial-step">
                        <span class="step-number">"2"</span>
                        <h3>"Generate an image"</h3>
                        <CodeBlock language="python" code=QUICKSTART_SNIPPET />
                    </Reveal>
                </div>
            </div>
        </Section>

        // Python Guide Section
        <Section id="python-guide" class="python-guide">
            <div class="container">
                <SectionHeader
                    title="Python Guide"
                    subtitle="Patterns for batch jobs and async services."
                />
                <div class="guide-grid">
                    <Reveal class="guide-card">
                        <h3>"Batch generation"</h3>
                        <CodeBlock language="python" code=BATCH_SNIPPET />
                    </Reveal>
                    <Reveal class="guide-card">
                        <h3>"Async client"</h3>
                        <CodeBlock language="python" code=ASYNC_SNIPPET />
                    </Reveal>
                </div>
            </div>
        </Section>

        // Use Cases Section
        <Section id="use-cases" class="use-cases">
            <div class="container">
                <SectionHeader
                    title="Built for Real Workloads"
                    subtitle="Teams already prototyping with Z Image."
                />
                <div class="use-cases-grid">
                    {USE_CASES.iter().enumerate().map(|(index, (title, description))| view! {
                        <div class="use-case-card" style=use_case_delay(index)>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </Section>

        // Comparison Section
        <Section id="comparison" class="comparison">
            <div class="container">
                <SectionHeader
                    title="How We Compare"
                    subtitle="Open weights without giving up speed."
                />
                <ComparisonTable />
            </div>
        </Section>

        // Pricing Section
        <Section id="pricing" class="pricing">
            <div class="container">
                <SectionHeader
                    title="Simple, Transparent Pricing"
                    subtitle="Self-host for free or pay only for what you generate."
                />
                <PricingSection />
            </div>
        </Section>

        // Waitlist Section
        <Section id="waitlist" class="waitlist" seen=(WAITLIST_OBSERVER, waitlist_seen)>
            <div class="container">
                <SectionHeader
                    title="Join the Waitlist"
                    subtitle="Be first in line for hosted API access and launch pricing."
                />
                <WaitlistCounter start=waitlist_seen />
                <WaitlistForm />
            </div>
        </Section>

        // FAQ Section
        <Section id="faq" class="faq">
            <div class="container">
                <SectionHeader
                    title="Frequently Asked Questions"
                    subtitle="Got questions? We've got answers."
                />
                <div class="faq-list">
                    {FAQS.iter().map(|(question, answer)| view! {
                        <FaqItem question=*question answer=*answer />
                    }).collect_view()}
                </div>
            </div>
        </Section>

        // GitHub Section
        <Section id="github" class="github">
            <div class="container github-content">
                <h2>"Built in the Open"</h2>
                <p>"Star the repository, read the code and help shape the model."</p>
                <LinkButton
                    href=GITHUB_URL
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Large
                    icon=icons::GITHUB
                    external=true
                >
                    "Star on GitHub"
                </LinkButton>
            </div>
        </Section>

        <Footer />
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

/// Comparison table with a swipe hint on narrow screens
#[component]
fn ComparisonTable() -> impl IntoView {
    let hint = RwSignal::new(ScrollHint::Hidden);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        hint.set(ScrollHint::for_viewport(width));
    });

    let on_scroll = move |_| {
        if hint.get_untracked() != ScrollHint::Shown {
            return;
        }
        hint.set(ScrollHint::Shown.scrolled());

        #[cfg(not(feature = "ssr"))]
        gloo_timers::callback::Timeout::new(
            crate::core::landing::SCROLL_HINT_FADE_MS,
            move || hint.set(ScrollHint::Hidden),
        )
        .forget();
    };

    view! {
        <div class="comparison-table-wrapper" on:scroll=on_scroll>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Feature"</th>
                        <th class="highlight">"Z Image API"</th>
                        <th>"Closed APIs"</th>
                        <th>"Other open models"</th>
                    </tr>
                </thead>
                <tbody>
                    {COMPARISON.iter().map(|(feature, ours, closed, open)| view! {
                        <tr>
                            <td>{*feature}</td>
                            <td class="highlight">{*ours}</td>
                            <td>{*closed}</td>
                            <td>{*open}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <Show when=move || hint.get().is_rendered()>
                <div class="scroll-hint" style=move || hint.get().style()>
                    "← Swipe to see more →"
                </div>
            </Show>
        </div>
    }
}

/// FAQ card that fades in and pulses when clicked
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_revealed(node, REVEAL_OBSERVER);
    let (pulsing, set_pulsing) = signal(false);

    let style = move || {
        if revealed.get() {
            format!("{} {}", reveal_style(true), faq_item_style(pulsing.get()))
        } else {
            format!("{} cursor: pointer;", reveal_style(false))
        }
    };

    let on_click = move |_| {
        set_pulsing.set(!pulsing.get_untracked());

        #[cfg(not(feature = "ssr"))]
        gloo_timers::callback::Timeout::new(crate::core::landing::FAQ_PULSE_MS, move || {
            set_pulsing.set(false)
        })
        .forget();
    };

    view! {
        <div node_ref=node class="faq-item" style=style on:click=on_click>
            <h3 class="faq-question">{question}</h3>
            <p class="faq-answer">{answer}</p>
        </div>
    }
}

/// SEO meta tags and structured data
#[component]
fn SeoMeta() -> impl IntoView {
    let active = use_context::<crate::ui::reveal::ActiveSection>();
    let title = move || page_title(active.and_then(|a| a.0.get()));
    let json_ld = structured_data(SITE_URL).to_string();

    view! {
        // Follows the section in view
        <Title text=title />

        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content=SITE_KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content="Z Image API - Advanced AI Image Generation" />
        <Meta property="og:description" content=SITE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Z Image API - Advanced AI Image Generation" />
        <Meta name="twitter:description" content=SITE_DESCRIPTION />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <Icon name=icons::LIGHTNING class="logo-icon"/>
                    <span>"Z Image API"</span>
                    <p>"Fast, open image generation for developers."</p>
                </div>
                <div class="footer-links">
                    <a href="#features">"Features"</a>
                    <a href="#tutorial">"Tutorial"</a>
                    <a href="#pricing">"Pricing"</a>
                    <a href="#faq">"FAQ"</a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                </div>
                <p class="footer-copy">"© 2025 Z Image API. All rights reserved."</p>
            </div>
        </footer>
    }
}
