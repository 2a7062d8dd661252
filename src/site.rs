use crate::config::SiteConfig;
use crate::core::perf::Fidelity;
use crate::fade::FadeIn;
use crate::menu::MobileMenu;
use crate::parallax::Parallax;
use crate::perf;
use crate::scroll::SmoothScroll;
use crate::twinkle::Twinkle;
use web_sys as web;

/// A page behavior that owns its listeners and timers until stopped.
pub trait Effect {
    fn name(&self) -> &'static str;
    fn stop(&mut self);
}

/// Every effect running on the current page.
pub struct Site {
    effects: Vec<Box<dyn Effect>>,
    fidelity: Fidelity,
}

impl Site {
    pub fn start(document: &web::Document, config: &SiteConfig) -> Self {
        let sel = &config.selectors;
        let mut effects: Vec<Box<dyn Effect>> = Vec::new();

        if let Some(fade) = FadeIn::start(document, &sel.fade, &config.fade) {
            effects.push(Box::new(fade));
        }
        let parallax = Parallax::start(document, &sel.constellation, config.parallax);
        let fidelity = perf::apply(document, &config.perf, parallax.as_ref());
        if let Some(p) = parallax {
            effects.push(Box::new(p));
        }
        if let Some(menu) = MobileMenu::start(document, sel, &config.menu) {
            effects.push(Box::new(menu));
        }
        if let Some(twinkle) = Twinkle::start(document, &sel.star, config.twinkle) {
            effects.push(Box::new(twinkle));
        }
        if let Some(scroll) = SmoothScroll::start(document, &sel.nav_link) {
            effects.push(Box::new(scroll));
        }

        let names: Vec<&str> = effects.iter().map(|e| e.name()).collect();
        log::info!("[site] running {:?} fidelity={:?}", names, fidelity);
        Self { effects, fidelity }
    }

    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    pub fn stop(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.stop();
            log::debug!("[site] stopped {}", effect.name());
        }
        self.effects.clear();
    }
}
