use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{
    self, Differentiator, FacultyMember, FreeResource, NoteCategory, Testimonial, Topper,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <Hero />
            <About />
            <NotesCatalog />
            <FreeResources />
            <Toppers />
            <Testimonials />
            <WhyChoose />
            <Faculty />
            <FinalCta />
            <Footer />
            <MobileCtaBar />
            <LandingStyles />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-left">
                <div class="hero-badge">
                    <span class="badge-dot"></span>
                    {" Now enrolling — Class 9 to 12"}
                </div>
                <h1>{"Physics jo "}<span class="glow-word">{"dil se"}</span>{" samajh aaye."}</h1>
                <div class="hero-sub">
                    { for content::HERO_SUB_LINES.iter().map(|line| html! {
                        <div class="line" key={*line}><span class="dot"></span>{" "}{*line}</div>
                    }) }
                </div>
                <div class="hero-highlights">
                    { for content::HERO_HIGHLIGHTS.iter().map(|tag| html! {
                        <div class="highlight-tag" key={*tag}>
                            <span class="hl-icon">{"✔"}</span>{" "}{*tag}
                        </div>
                    }) }
                </div>
                <div class="hero-btns">
                    <button class="btn-primary">{"Start Learning Free"}</button>
                    <button class="btn-secondary">
                        <span class="play-icon">{"▶"}</span>{" Watch Demo Class"}
                    </button>
                </div>
                <p class="hero-emotion">
                    {"\"Har baccha physics samajh sakta hai — bas tareeka sahi hona chahiye.\""}
                </p>
            </div>
            <div class="hero-right">
                <div class="hero-visual">
                    <div class="visual-core"></div>
                    <div class="visual-ring r1"></div>
                    <div class="visual-ring r2"></div>
                    <span class="symbol s1">{"⚡"}</span>
                    <span class="symbol s2">{"∿"}</span>
                    <span class="symbol s3">{"Ω"}</span>
                    <span class="symbol s4">{"E=mc²"}</span>
                    <span class="symbol s5">{"F=ma"}</span>
                    <span class="symbol s6">{"λ"}</span>
                    <div class="notebook-card">
                        <div class="nb-line"></div>
                        <div class="nb-line"></div>
                        <div class="nb-line"></div>
                        <div class="nb-formula">{"F = ma"}</div>
                        <div class="nb-sub">{"Newton's 2nd Law"}</div>
                        <div class="nb-line" style="margin-top: 8px;"></div>
                    </div>
                    <div class="particle"></div>
                    <div class="particle"></div>
                    <div class="particle"></div>
                    <div class="particle"></div>
                    <div class="particle"></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="section section-alt" id="about">
            <Reveal>
                <div class="section-label">{"About Us"}</div>
                <h2 class="section-title">
                    {"Physics ko "}<span class="acc">{"samajhne"}</span>{" ka sahi jagah"}
                </h2>
                <p class="section-desc">
                    {"Fit Physics ek specialized coaching center hai jahan concept-based learning se har student apni pace par physics master kar sakta hai — Board ho ya Competitive exam."}
                </p>
            </Reveal>
            <div class="about-grid">
                <Reveal>
                    <div class="about-visual">
                        <div class="about-visual-inner">
                            <div class="av-icon">{"🏫"}</div>
                            <p>{"Established in 2015 — Trusted by thousands of students across India for CBSE, JEE & NEET preparation."}</p>
                        </div>
                    </div>
                    <div class="about-stat-row">
                        { for content::ABOUT_STATS.iter().map(|stat| html! {
                            <div class="stat-card" key={stat.label}>
                                <div class="stat-num">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal delay_ms={150}>
                    <div style="padding-top: 24px;">
                        <p style="color: var(--text-dim); font-size: 0.9rem; line-height: 1.9;">
                            {"Fit Physics ka philosophy simple hai — "}
                            <strong style="color: #fff;">{"har baccha intelligent hai, bas sahi direction chahiye."}</strong>
                            {" Hamare experienced teachers har concept ko aise explain karte hain ki dil se samajh aata hai, sirf rote se nahi."}
                        </p>
                        <p style="color: var(--text-dim); font-size: 0.9rem; line-height: 1.9; margin-top: 16px;">
                            {"Online aur in-person dono options available hain taaki har student apni comfort zone mein padh sake. Hamara goal hai ki physics har student ke liye ek "}
                            <strong style="color: var(--accent);">{"strength"}</strong>
                            {" ban jaaye, ek "}
                            <strong style="color: var(--accent);">{"dar"}</strong>
                            {" nahi."}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn note_card(category: &NoteCategory) -> Html {
    html! {
        <div class="card">
            <div class={classes!("card-icon", category.accent.icon_class())}>{category.icon}</div>
            <h3>{category.title}</h3>
            <p>{format!("{} detailed topic modules with practice problems aur solved examples.", category.topics)}</p>
            <span class="card-tag">{format!("{} Topics Available →", category.topics)}</span>
        </div>
    }
}

#[function_component(NotesCatalog)]
fn notes_catalog() -> Html {
    html! {
        <section class="section" id="courses">
            <Reveal>
                <div class="section-label">{"Notes & Study Material"}</div>
                <h2 class="section-title">
                    {"Structured notes jo "}<span class="acc">{"samajhne mein"}</span>{" help karte hain"}
                </h2>
                <p class="section-desc">
                    {"Har topic ke liye clean, color-coded notes prepared by expert teachers. PDF + video combo available."}
                </p>
            </Reveal>
            <div class="card-grid">
                { for content::NOTE_CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                    <Reveal key={category.title} delay_ms={(i as u32) * 80}>
                        { note_card(category) }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn resource_row(resource: &FreeResource) -> Html {
    html! {
        <div class="resource-row" key={resource.title}>
            <div class={classes!("res-icon", resource.accent.icon_class())}>{resource.icon}</div>
            <div class="res-info">
                <h4>{resource.title}</h4>
                <span>{resource.detail}</span>
            </div>
            <button class="res-btn">{"Free ↓"}</button>
        </div>
    }
}

#[function_component(FreeResources)]
fn free_resources() -> Html {
    html! {
        <section class="section section-alt" id="resources">
            <Reveal>
                <div class="section-label">{"Free Resources"}</div>
                <h2 class="section-title">
                    {"Bilkul "}<span class="acc">{"free"}</span>{" — koi compromise nahi"}
                </h2>
                <p class="section-desc">
                    {"Shuru karne ke liye koi payment nahi. Ye resources directly download karo aur apni journey start karo."}
                </p>
            </Reveal>
            <div class="two-col">
                <Reveal>
                    <div class="resource-panel">
                        { for content::FREE_RESOURCES.iter().map(resource_row) }
                    </div>
                </Reveal>
                <Reveal delay_ms={150}>
                    <div class="resource-upsell">
                        <div style="font-size: 2.8rem; margin-bottom: 16px;">{"🎯"}</div>
                        <h3>{"Ready to go deeper?"}</h3>
                        <p>{"Full course access unlock karo aur structured learning path pe ho jao. Online + offline dono options."}</p>
                        <button class="btn-primary" style="font-size: 0.82rem; padding: 11px 24px;">
                            {"See Full Courses"}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn topper_card(topper: &Topper) -> Html {
    html! {
        <div class="topper-card">
            <div class="topper-rank">{topper.rank_badge}</div>
            <div class={classes!("topper-avatar", topper.accent.avatar_class())}>{topper.initials}</div>
            <h4>{topper.name}</h4>
            <div class="tc-exam">{topper.exam}</div>
            <div class="tc-score">{topper.score}</div>
            <div class="tc-score-label">{"Final Result"}</div>
        </div>
    }
}

#[function_component(Toppers)]
fn toppers() -> Html {
    html! {
        <section class="section" id="toppers">
            <Reveal>
                <div class="section-label">{"Our Toppers"}</div>
                <h2 class="section-title">
                    {"Results jo "}<span class="acc">{"baat bolte"}</span>{" hain"}
                </h2>
                <p class="section-desc">
                    {"Ye sirf numbers nahi — ye hai mehnat aur sahi guidance ka result. Har topper ki story inspiration hai."}
                </p>
            </Reveal>
            <div class="topper-grid">
                { for content::TOPPERS.iter().enumerate().map(|(i, topper)| html! {
                    <Reveal key={topper.name} delay_ms={(i as u32) * 100}>
                        { topper_card(topper) }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testi-card">
            <div class="testi-quote">{"❝"}</div>
            <div class="stars">{"★★★★★"}</div>
            <p>{format!("\"{}\"", testimonial.quote)}</p>
            <div class="testi-author">
                <div class={classes!("testi-avatar", testimonial.accent.avatar_class())}>
                    {testimonial.initials}
                </div>
                <div class="testi-author-info">
                    <h5>{testimonial.name}</h5>
                    <span>{testimonial.class_info}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section section-alt">
            <Reveal>
                <div class="section-label">{"Student Stories"}</div>
                <h2 class="section-title">
                    {"Wo kya kehte "}<span class="acc">{"hain"}</span>
                </h2>
                <p class="section-desc">
                    {"Real students, real experiences. Unki journey hamari sabse badi motivation hai."}
                </p>
            </Reveal>
            <div class="testimonial-grid">
                { for content::TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                    <Reveal key={testimonial.name} delay_ms={(i as u32) * 100}>
                        { testimonial_card(testimonial) }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn why_card(item: &Differentiator) -> Html {
    html! {
        <div class="why-card">
            <div class="why-number">{item.number}</div>
            <div class="why-icon">{item.icon}</div>
            <h3>{item.title}</h3>
            <p>{item.blurb}</p>
        </div>
    }
}

#[function_component(WhyChoose)]
fn why_choose() -> Html {
    html! {
        <section class="section" id="why">
            <Reveal>
                <div class="section-label">{"Why Choose Us"}</div>
                <h2 class="section-title">
                    {"Kyun "}<span class="acc">{"Fit Physics"}</span>{" choose karo"}
                </h2>
                <p class="section-desc">
                    {"Sirf ek coaching center nahi — ek complete learning ecosystem jo aapko success tak pahunchata hai."}
                </p>
            </Reveal>
            <div class="why-grid">
                { for content::DIFFERENTIATORS.iter().enumerate().map(|(i, item)| html! {
                    <Reveal key={item.number} delay_ms={(i as u32) * 80}>
                        { why_card(item) }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn faculty_card(member: &FacultyMember) -> Html {
    html! {
        <div class="faculty-card">
            <div class={classes!("faculty-header", member.accent.header_class())}>
                <div class={classes!("faculty-avatar", member.accent.avatar_class())}>
                    {member.initials}
                </div>
            </div>
            <div class="faculty-body">
                <h3>{member.name}</h3>
                <div class="f-subject">{member.subject}</div>
                <p>{member.bio}</p>
                <span class="faculty-exp">{member.experience}</span>
            </div>
        </div>
    }
}

#[function_component(Faculty)]
fn faculty() -> Html {
    html! {
        <section class="section section-alt" id="faculty">
            <Reveal>
                <div class="section-label">{"Our Faculty"}</div>
                <h2 class="section-title">
                    {"Teachers jo "}<span class="acc">{"inspire"}</span>{" karte hain"}
                </h2>
                <p class="section-desc">
                    {"IIT aur top university alumni — experienced, passionate, aur genuinely passionate about teaching."}
                </p>
            </Reveal>
            <div class="faculty-grid">
                { for content::FACULTY.iter().enumerate().map(|(i, member)| html! {
                    <Reveal key={member.name} delay_ms={(i as u32) * 120}>
                        { faculty_card(member) }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="cta-section">
            <Reveal>
                <div class="section-label" style="justify-content: center; display: flex;">
                    {"Get Started"}
                </div>
                <h2>
                    {"Physics ab "}<span class="acc">{"dar nahi"}</span>{" — "}<br/>
                    {"strength banegi."}
                </h2>
                <p>{"Aaj shuru karo. Free resources se begin karo, ya directly full course join karo. Apni journey yahan start hai."}</p>
                <div class="cta-btns">
                    <button class="btn-primary" style="font-size: 0.95rem; padding: 15px 36px;">
                        {"🚀 Start Learning Free"}
                    </button>
                    <button class="btn-secondary" style="font-size: 0.88rem;">
                        {"📞 Talk to Counselor"}
                    </button>
                </div>
                <p class="cta-trust">
                    {"Already trusted by "}<span>{"12,000+ students"}</span>{" across India • No credit card required"}
                </p>
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-row">
                <div class="logo">{"⚡ Fit Physics"}</div>
                <ul class="footer-links">
                    { for content::FOOTER_LINKS.iter().map(|label| html! {
                        <li key={*label}><a href="#">{*label}</a></li>
                    }) }
                </ul>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 Fit Physics CBSE Classes. All rights reserved. | Delhi, India"}</p>
            </div>
        </footer>
    }
}

// Pinned to the bottom of small screens so the enquiry actions stay one tap
// away; hidden on desktop.
#[function_component(MobileCtaBar)]
fn mobile_cta_bar() -> Html {
    html! {
        <div class="mobile-cta-bar">
            <button class="btn-primary">{"🚀 Start Learning Free"}</button>
            <button class="btn-secondary">{"📞 Talk to Counselor"}</button>
        </div>
    }
}

#[function_component(LandingStyles)]
fn landing_styles() -> Html {
    html! {
        <style>
            {r#"
/* hero */
.hero {
    min-height: 100vh; display: flex; align-items: center;
    padding: 120px 60px 80px;
    position: relative; overflow: hidden;
    background: radial-gradient(ellipse 80% 60% at 70% 50%, rgba(124,58,237,0.08) 0%, transparent 70%),
                radial-gradient(ellipse 60% 50% at 30% 60%, rgba(0,212,255,0.06) 0%, transparent 60%),
                var(--bg);
}
.hero-left { flex: 1; max-width: 560px; z-index: 2; position: relative; }
.hero-badge {
    display: inline-flex; align-items: center; gap: 8px;
    background: rgba(0,212,255,0.08); border: 1px solid rgba(0,212,255,0.2);
    padding: 7px 16px; border-radius: 50px; font-size: 0.78rem;
    color: var(--accent); font-weight: 500; margin-bottom: 28px;
    animation: fadeDown 0.8s ease both;
}
.badge-dot { width: 7px; height: 7px; background: var(--accent3); border-radius: 50%; animation: pulse-dot 2s infinite; }
@keyframes pulse-dot { 0%,100%{opacity:1} 50%{opacity:0.3} }

.hero h1 {
    font-family: 'Syne', sans-serif; font-size: 3.6rem; font-weight: 800;
    line-height: 1.1; letter-spacing: -1.5px; color: #fff;
    animation: fadeUp 0.9s ease 0.15s both;
}
.hero h1 .glow-word {
    background: linear-gradient(135deg, var(--accent), #a78bfa);
    -webkit-background-clip: text; -webkit-text-fill-color: transparent;
}
.hero-sub {
    margin-top: 22px; font-size: 1.05rem; color: var(--text-dim);
    line-height: 1.8; max-width: 440px;
    animation: fadeUp 0.9s ease 0.3s both;
}
.hero-sub .line { display: flex; align-items: center; gap: 10px; }
.hero-sub .dot { width: 6px; height: 6px; border-radius: 50%; background: var(--accent); opacity: 0.6; }

.hero-highlights {
    margin-top: 30px; display: flex; flex-wrap: wrap; gap: 12px;
    animation: fadeUp 0.9s ease 0.45s both;
}
.highlight-tag {
    display: flex; align-items: center; gap: 6px;
    background: rgba(255,255,255,0.04); border: 1px solid rgba(255,255,255,0.08);
    padding: 8px 14px; border-radius: 8px; font-size: 0.8rem; color: var(--text);
}
.highlight-tag .hl-icon { color: var(--accent3); font-size: 0.75rem; }

.hero-btns {
    margin-top: 36px; display: flex; gap: 14px; flex-wrap: wrap;
    animation: fadeUp 0.9s ease 0.6s both;
}
.btn-primary {
    background: linear-gradient(135deg, var(--accent), #06b6d4);
    color: #0a0e1a; border: none; padding: 14px 32px; border-radius: 50px;
    font-weight: 700; font-size: 0.9rem; cursor: pointer;
    box-shadow: 0 0 24px var(--glow); transition: transform 0.25s, box-shadow 0.3s;
    animation: pulse-btn 3s ease-in-out infinite;
}
.btn-primary:hover { transform: translateY(-2px) scale(1.03); box-shadow: 0 0 36px var(--glow); }
@keyframes pulse-btn { 0%,100%{box-shadow:0 0 24px var(--glow)} 50%{box-shadow:0 0 38px var(--glow)} }

.btn-secondary {
    background: transparent; color: var(--text); border: 1px solid rgba(255,255,255,0.15);
    padding: 14px 28px; border-radius: 50px; font-weight: 500; font-size: 0.9rem;
    cursor: pointer; transition: border-color 0.3s, color 0.3s, background 0.3s;
    display: flex; align-items: center; gap: 8px;
}
.btn-secondary:hover { border-color: var(--accent); color: var(--accent); background: rgba(0,212,255,0.05); }
.play-icon {
    width: 32px; height: 32px; border-radius: 50%;
    background: rgba(0,212,255,0.1); border: 1px solid rgba(0,212,255,0.25);
    display: flex; align-items: center; justify-content: center;
    font-size: 0.7rem; color: var(--accent);
}

.hero-emotion {
    margin-top: 40px; font-size: 0.82rem; color: var(--text-dim);
    font-style: italic; opacity: 0.7; max-width: 380px;
    animation: fadeUp 0.9s ease 0.75s both;
    border-left: 2px solid rgba(0,212,255,0.3); padding-left: 16px;
}

.hero-right {
    flex: 1; display: flex; align-items: center; justify-content: center;
    position: relative; min-height: 420px; z-index: 1;
}
.hero-visual {
    width: 380px; height: 380px; position: relative;
    animation: float 6s ease-in-out infinite;
}
@keyframes float { 0%,100%{transform:translateY(0)} 50%{transform:translateY(-18px)} }

.visual-core {
    position: absolute; inset: 0; border-radius: 50%;
    background: radial-gradient(circle at 40% 40%, rgba(0,212,255,0.12), rgba(124,58,237,0.08), transparent 70%);
    border: 1px solid rgba(0,212,255,0.1);
}
.visual-ring {
    position: absolute; border-radius: 50%; border: 1px solid rgba(0,212,255,0.08);
}
.visual-ring.r1 { inset: -30px; }
.visual-ring.r2 { inset: -60px; border-color: rgba(124,58,237,0.06); }

.symbol {
    position: absolute; font-family: 'Syne', sans-serif; font-weight: 700;
    color: var(--accent); opacity: 0.7; text-shadow: 0 0 12px var(--glow);
    animation: drift 4s ease-in-out infinite;
}
.symbol.s1 { top: 8%; left: 12%; font-size: 1.8rem; animation-delay: 0s; }
.symbol.s2 { top: 15%; right: 10%; font-size: 1.4rem; color: var(--accent2); animation-delay: 0.6s; text-shadow: 0 0 12px var(--glow2); }
.symbol.s3 { bottom: 20%; left: 8%; font-size: 2rem; animation-delay: 1.2s; }
.symbol.s4 { bottom: 12%; right: 15%; font-size: 1.2rem; color: var(--accent3); animation-delay: 0.3s; text-shadow: 0 0 10px rgba(0,255,136,0.3); }
.symbol.s5 { top: 42%; left: 2%; font-size: 1rem; color: var(--accent2); animation-delay: 0.9s; }
.symbol.s6 { top: 30%; right: 3%; font-size: 1.5rem; animation-delay: 1.5s; }
@keyframes drift { 0%,100%{transform:translateY(0) rotate(0deg)} 50%{transform:translateY(-8px) rotate(3deg)} }

.notebook-card {
    position: absolute; top: 50%; left: 50%; transform: translate(-50%,-50%);
    width: 160px; height: 190px;
    background: linear-gradient(145deg, #1a2240, #151d35);
    border-radius: 12px; border: 1px solid rgba(0,212,255,0.12);
    box-shadow: 0 12px 40px rgba(0,0,0,0.4), 0 0 20px rgba(0,212,255,0.05);
    padding: 18px; display: flex; flex-direction: column; gap: 8px;
}
.nb-line {
    height: 3px; border-radius: 2px;
    background: linear-gradient(90deg, rgba(0,212,255,0.25), rgba(124,58,237,0.15));
}
.nb-line:nth-child(2) { width: 75%; }
.nb-line:nth-child(3) { width: 60%; }
.nb-formula {
    margin-top: 6px; font-family: 'Syne', sans-serif; font-size: 0.85rem;
    color: var(--accent); opacity: 0.85;
}
.nb-sub { font-size: 0.65rem; color: var(--text-dim); margin-top: 2px; }

.particle {
    position: absolute; width: 4px; height: 4px; border-radius: 50%;
    background: var(--accent); opacity: 0.4;
    animation: particle-float 5s ease-in-out infinite;
}
.particle:nth-child(1) { top: 10%; left: 25%; animation-delay: 0s; }
.particle:nth-child(2) { top: 60%; left: 70%; animation-delay: 1s; background: var(--accent2); }
.particle:nth-child(3) { top: 80%; left: 30%; animation-delay: 2s; background: var(--accent3); }
.particle:nth-child(4) { top: 25%; left: 80%; animation-delay: 1.5s; }
.particle:nth-child(5) { top: 70%; left: 15%; animation-delay: 0.7s; background: var(--accent2); }
@keyframes particle-float { 0%,100%{transform:translateY(0) scale(1);opacity:0.4} 50%{transform:translateY(-20px) scale(1.4);opacity:0.8} }

/* shared section styles */
.section { padding: 100px 60px; position: relative; }
.section-alt { background: var(--bg2); }
.section-label {
    display: inline-flex; align-items: center; gap: 8px;
    font-size: 0.72rem; text-transform: uppercase; letter-spacing: 2.5px;
    color: var(--accent); font-weight: 600; margin-bottom: 14px;
}
.section-label::before { content: ''; width: 28px; height: 2px; background: var(--accent); border-radius: 1px; }
.section-title {
    font-family: 'Syne', sans-serif; font-size: 2.6rem; font-weight: 800;
    color: #fff; line-height: 1.15; letter-spacing: -1px; max-width: 520px;
}
.section-title .acc { color: var(--accent); }
.section-desc {
    color: var(--text-dim); font-size: 0.95rem; max-width: 480px;
    margin-top: 14px; line-height: 1.8;
}
.reveal { opacity: 0; transform: translateY(30px); transition: opacity 0.7s ease, transform 0.7s ease; }
.reveal.visible { opacity: 1; transform: translateY(0); }

@keyframes fadeUp { from{opacity:0;transform:translateY(24px)} to{opacity:1;transform:translateY(0)} }
@keyframes fadeDown { from{opacity:0;transform:translateY(-12px)} to{opacity:1;transform:translateY(0)} }

/* about */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 60px; align-items: center; margin-top: 50px; }
.about-visual {
    position: relative; height: 340px;
    background: linear-gradient(135deg, #131a30, #1a2240);
    border-radius: 20px; border: 1px solid rgba(0,212,255,0.08);
    overflow: hidden; display: flex; align-items: center; justify-content: center;
}
.about-stat-row { display: flex; gap: 32px; margin-top: 32px; flex-wrap: wrap; }
.stat-card { text-align: left; }
.stat-num {
    font-family: 'Syne', sans-serif; font-size: 2.2rem; font-weight: 800;
    background: linear-gradient(135deg, var(--accent), #a78bfa);
    -webkit-background-clip: text; -webkit-text-fill-color: transparent;
}
.stat-label { font-size: 0.78rem; color: var(--text-dim); margin-top: 2px; }

.about-visual-inner {
    font-family: 'Syne', sans-serif; text-align: center; z-index: 1;
}
.about-visual-inner .av-icon { font-size: 3.2rem; margin-bottom: 10px; }
.about-visual-inner p { font-size: 0.82rem; color: var(--text-dim); max-width: 220px; line-height: 1.6; }
.about-visual::before {
    content: ''; position: absolute; inset: 0;
    background: radial-gradient(circle at 60% 40%, rgba(0,212,255,0.07), transparent 60%);
}

/* cards */
.card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 22px; margin-top: 48px; }
.card {
    background: linear-gradient(145deg, rgba(20,26,46,0.9), rgba(15,20,41,0.7));
    border: 1px solid rgba(255,255,255,0.06);
    border-radius: 16px; padding: 30px 24px;
    transition: border-color 0.35s, transform 0.3s, box-shadow 0.35s;
    position: relative; overflow: hidden;
}
.card:hover { border-color: rgba(0,212,255,0.25); transform: translateY(-4px); box-shadow: 0 8px 32px rgba(0,0,0,0.3); }
.card::before {
    content: ''; position: absolute; top: 0; left: 0; right: 0; height: 2px;
    background: linear-gradient(90deg, var(--accent), var(--accent2));
    opacity: 0; transition: opacity 0.35s;
}
.card:hover::before { opacity: 1; }
.card-icon {
    width: 48px; height: 48px; border-radius: 12px;
    display: flex; align-items: center; justify-content: center; font-size: 1.3rem;
    margin-bottom: 18px;
}
.icon-blue { background: rgba(0,212,255,0.1); }
.icon-purple { background: rgba(124,58,237,0.1); }
.icon-green { background: rgba(0,255,136,0.1); }
.icon-pink { background: rgba(236,72,153,0.1); }
.card h3 { font-family: 'Syne', sans-serif; font-size: 1.05rem; font-weight: 700; color: #fff; margin-bottom: 8px; }
.card p { font-size: 0.82rem; color: var(--text-dim); line-height: 1.7; }
.card-tag {
    display: inline-block; margin-top: 14px; font-size: 0.7rem; font-weight: 600;
    color: var(--accent); background: rgba(0,212,255,0.08);
    padding: 4px 10px; border-radius: 20px;
}

/* free resources */
.resource-panel {
    background: linear-gradient(145deg, #141a2e, #0f1429);
    border-radius: 16px; border: 1px solid rgba(255,255,255,0.06);
    padding: 28px;
}
.resource-row { display: flex; align-items: center; gap: 16px; padding: 18px 0; border-bottom: 1px solid rgba(255,255,255,0.05); }
.resource-row:last-child { border-bottom: none; }
.res-icon {
    width: 44px; height: 44px; border-radius: 10px; flex-shrink: 0;
    display: flex; align-items: center; justify-content: center; font-size: 1.1rem;
}
.res-info { flex: 1; }
.res-info h4 { font-family: 'Syne', sans-serif; font-size: 0.9rem; font-weight: 600; color: #fff; }
.res-info span { font-size: 0.76rem; color: var(--text-dim); }
.res-btn {
    background: transparent; border: 1px solid rgba(0,212,255,0.3); color: var(--accent);
    padding: 7px 18px; border-radius: 50px; font-size: 0.74rem; font-weight: 600;
    cursor: pointer; transition: background 0.3s, color 0.3s;
}
.res-btn:hover { background: var(--accent); color: #0a0e1a; }

.resource-upsell {
    background: linear-gradient(145deg, #141a2e, #0f1429);
    border-radius: 16px; border: 1px solid rgba(124,58,237,0.15);
    padding: 32px; display: flex; flex-direction: column;
    align-items: center; justify-content: center; height: 100%; text-align: center;
}
.resource-upsell h3 { font-family: 'Syne', sans-serif; color: #fff; font-size: 1.15rem; margin-bottom: 10px; }
.resource-upsell p { color: var(--text-dim); font-size: 0.82rem; line-height: 1.7; margin-bottom: 20px; }

.two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; margin-top: 48px; }

/* toppers */
.topper-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 18px; margin-top: 48px; }
.topper-card {
    background: linear-gradient(145deg, #141a2e, #0f1429);
    border: 1px solid rgba(255,255,255,0.06); border-radius: 16px;
    padding: 28px 20px; text-align: center; position: relative;
    transition: transform 0.3s, border-color 0.35s;
}
.topper-card:hover { transform: translateY(-4px); border-color: rgba(124,58,237,0.3); }
.topper-rank {
    position: absolute; top: -12px; left: 50%; transform: translateX(-50%);
    background: linear-gradient(135deg, var(--accent), var(--accent2));
    color: #fff; font-family: 'Syne', sans-serif; font-weight: 800; font-size: 0.75rem;
    padding: 4px 16px; border-radius: 20px;
}
.topper-avatar {
    width: 64px; height: 64px; border-radius: 50%; margin: 14px auto 12px;
    display: flex; align-items: center; justify-content: center;
    font-family: 'Syne', sans-serif; font-size: 1.4rem; font-weight: 800; color: #fff;
}
.av-blue { background: linear-gradient(135deg, #0891b2, #06b6d4); }
.av-purple { background: linear-gradient(135deg, #7c3aed, #a78bfa); }
.av-green { background: linear-gradient(135deg, #059669, #34d399); }
.av-pink { background: linear-gradient(135deg, #ec4899, #f472b6); }
.topper-card h4 { font-family: 'Syne', sans-serif; font-size: 0.92rem; font-weight: 700; color: #fff; }
.topper-card .tc-exam { font-size: 0.72rem; color: var(--text-dim); margin-top: 4px; }
.topper-card .tc-score { margin-top: 8px; font-family: 'Syne', sans-serif; font-size: 1.3rem; font-weight: 800; color: var(--accent3); }
.topper-card .tc-score-label { font-size: 0.68rem; color: var(--text-dim); }

/* testimonials */
.testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; margin-top: 48px; }
.testi-card {
    background: linear-gradient(145deg, #141a2e, #0f1429);
    border: 1px solid rgba(255,255,255,0.06); border-radius: 16px;
    padding: 28px; position: relative; transition: border-color 0.35s;
}
.testi-card:hover { border-color: rgba(0,212,255,0.2); }
.testi-quote { font-size: 1.8rem; color: var(--accent); opacity: 0.3; font-family: 'Syne', sans-serif; line-height: 1; margin-bottom: 12px; }
.testi-card p { font-size: 0.82rem; color: var(--text-dim); line-height: 1.75; font-style: italic; }
.testi-author { display: flex; align-items: center; gap: 12px; margin-top: 20px; }
.testi-avatar {
    width: 38px; height: 38px; border-radius: 50%;
    display: flex; align-items: center; justify-content: center;
    font-size: 0.85rem; font-weight: 700; color: #fff;
}
.testi-author-info h5 { font-family: 'Syne', sans-serif; font-size: 0.82rem; font-weight: 600; color: #fff; }
.testi-author-info span { font-size: 0.7rem; color: var(--text-dim); }
.stars { color: #fbbf24; font-size: 0.7rem; letter-spacing: 2px; margin-bottom: 10px; }

/* why choose */
.why-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 22px; margin-top: 48px; }
.why-card {
    background: linear-gradient(145deg, rgba(20,26,46,0.85), rgba(15,20,41,0.6));
    border: 1px solid rgba(255,255,255,0.06); border-radius: 16px;
    padding: 32px 24px; text-align: center; position: relative;
    transition: transform 0.3s, border-color 0.35s, box-shadow 0.35s;
}
.why-card:hover { transform: translateY(-4px); border-color: rgba(0,212,255,0.2); box-shadow: 0 8px 30px rgba(0,0,0,0.25); }
.why-number {
    position: absolute; top: 16px; right: 20px;
    font-family: 'Syne', sans-serif; font-size: 3.5rem; font-weight: 800;
    color: rgba(0,212,255,0.06); line-height: 1;
}
.why-icon { font-size: 2rem; margin-bottom: 16px; }
.why-card h3 { font-family: 'Syne', sans-serif; font-size: 1rem; font-weight: 700; color: #fff; margin-bottom: 8px; }
.why-card p { font-size: 0.8rem; color: var(--text-dim); line-height: 1.7; }

/* faculty */
.faculty-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 22px; margin-top: 48px; }
.faculty-card {
    background: linear-gradient(145deg, #141a2e, #0f1429);
    border: 1px solid rgba(255,255,255,0.06); border-radius: 16px;
    overflow: hidden; transition: transform 0.3s, border-color 0.35s;
}
.faculty-card:hover { transform: translateY(-3px); border-color: rgba(124,58,237,0.25); }
.faculty-header {
    height: 110px; display: flex; align-items: center; justify-content: center;
    position: relative;
}
.fh-blue { background: linear-gradient(135deg, rgba(8,145,178,0.25), rgba(6,182,212,0.1)); }
.fh-purple { background: linear-gradient(135deg, rgba(124,58,237,0.25), rgba(167,139,250,0.1)); }
.fh-green { background: linear-gradient(135deg, rgba(5,150,105,0.25), rgba(52,211,153,0.1)); }
.fh-pink { background: linear-gradient(135deg, rgba(236,72,153,0.25), rgba(244,114,182,0.1)); }
.faculty-avatar {
    width: 72px; height: 72px; border-radius: 50%; border: 3px solid rgba(255,255,255,0.1);
    display: flex; align-items: center; justify-content: center;
    font-family: 'Syne', sans-serif; font-size: 1.5rem; font-weight: 800; color: #fff;
    position: relative; z-index: 1;
}
.faculty-body { padding: 20px; }
.faculty-body h3 { font-family: 'Syne', sans-serif; font-size: 1rem; font-weight: 700; color: #fff; }
.faculty-body .f-subject { font-size: 0.75rem; color: var(--accent); font-weight: 600; margin-top: 2px; }
.faculty-body p { font-size: 0.78rem; color: var(--text-dim); margin-top: 8px; line-height: 1.6; }
.faculty-exp {
    display: inline-block; margin-top: 10px; font-size: 0.68rem; font-weight: 600;
    color: var(--accent2); background: rgba(124,58,237,0.1);
    padding: 3px 10px; border-radius: 20px;
}

/* final cta */
.cta-section {
    text-align: center; padding: 120px 60px;
    background: linear-gradient(180deg, var(--bg2), var(--bg));
    position: relative; overflow: hidden;
}
.cta-section::before {
    content: ''; position: absolute; top: 50%; left: 50%; transform: translate(-50%,-50%);
    width: 600px; height: 600px; border-radius: 50%;
    background: radial-gradient(circle, rgba(0,212,255,0.06), transparent 65%);
    pointer-events: none;
}
.cta-section h2 {
    font-family: 'Syne', sans-serif; font-size: 3rem; font-weight: 800;
    color: #fff; line-height: 1.15; letter-spacing: -1px;
    position: relative; z-index: 1;
}
.cta-section h2 .acc { color: var(--accent); }
.cta-section p { color: var(--text-dim); font-size: 1rem; margin-top: 16px; max-width: 480px; margin-left: auto; margin-right: auto; position: relative; z-index: 1; }
.cta-btns { display: flex; justify-content: center; gap: 16px; margin-top: 36px; flex-wrap: wrap; position: relative; z-index: 1; }
.cta-trust { color: var(--text-dim); font-size: 0.75rem; margin-top: 28px; position: relative; z-index: 1; }
.cta-trust span { color: var(--accent); font-weight: 600; }

/* footer */
.footer {
    background: var(--bg); border-top: 1px solid rgba(255,255,255,0.05);
    padding: 48px 60px 28px;
}
.footer-row { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 20px; }
.footer .logo { font-size: 1.2rem; }
.footer-links { display: flex; gap: 24px; list-style: none; flex-wrap: wrap; }
.footer-links a { color: var(--text-dim); text-decoration: none; font-size: 0.78rem; transition: color 0.3s; }
.footer-links a:hover { color: var(--accent); }
.footer-bottom { text-align: center; margin-top: 32px; padding-top: 20px; border-top: 1px solid rgba(255,255,255,0.04); }
.footer-bottom p { font-size: 0.72rem; color: var(--text-dim); }

/* sticky mobile cta */
.mobile-cta-bar {
    display: none;
    position: fixed; bottom: 0; left: 0; width: 100%; z-index: 900;
    padding: 12px 16px calc(12px + env(safe-area-inset-bottom));
    background: rgba(10,14,26,0.92);
    backdrop-filter: blur(14px);
    border-top: 1px solid rgba(0,212,255,0.12);
    gap: 10px;
}
.mobile-cta-bar .btn-primary { flex: 1.3; padding: 12px 10px; font-size: 0.8rem; animation: none; }
.mobile-cta-bar .btn-secondary { flex: 1; padding: 12px 10px; font-size: 0.78rem; justify-content: center; }

/* responsive */
@media (max-width: 900px) {
    .hero { flex-direction: column; padding: 130px 36px 60px; text-align: center; }
    .hero-left { max-width: 100%; }
    .hero h1 { font-size: 2.6rem; }
    .hero-sub .line { justify-content: center; }
    .hero-highlights { justify-content: center; }
    .hero-btns { justify-content: center; }
    .hero-emotion { margin-left: auto; margin-right: auto; }
    .hero-right { min-height: 260px; }
    .hero-visual { width: 240px; height: 240px; }
    .card-grid, .why-grid, .faculty-grid { grid-template-columns: 1fr; }
    .topper-grid { grid-template-columns: repeat(2, 1fr); }
    .testimonial-grid { grid-template-columns: 1fr; }
    .about-grid { grid-template-columns: 1fr; }
    .two-col { grid-template-columns: 1fr; }
    .section { padding: 70px 36px; }
    .section-title { font-size: 2rem; }
    .mobile-cta-bar { display: flex; }
    .landing { padding-bottom: 72px; }
    .footer { padding: 48px 24px 96px; }
}
            "#}
        </style>
    }
}
