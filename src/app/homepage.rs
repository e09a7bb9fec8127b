use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::contact::{Contact, Footer};
use super::header::Header;
use super::hero::Hero;
use super::projects::{ProjectModal, Projects};
use super::resume::{About, Achievements, Education, Experience, Skills};
use crate::profile::PROFILE;
use crate::rotation::{RoleRotation, TickGate, TickHandle, ROTATION_INTERVAL_MS};
use crate::selection::ProjectSelection;

fn initial_rotation() -> RoleRotation {
    match RoleRotation::new(PROFILE.roles) {
        Ok(rotation) => rotation,
        Err(e) => {
            log::warn!("{e}, showing the profile title instead");
            RoleRotation::single(&PROFILE.title)
        }
    }
}

/// Advances `rotation` every [`ROTATION_INTERVAL_MS`] until the returned
/// handle is cancelled.
fn start_role_rotation(rotation: RwSignal<RoleRotation>, gate: TickGate) -> TickHandle {
    let tick = gate.guard(move || rotation.update(RoleRotation::tick));
    let Pausable { pause, .. } = use_interval_fn(tick, ROTATION_INTERVAL_MS);
    log::debug!("role rotation started");
    TickHandle::new(gate, pause)
}

/// Starts the rotation and cancels it when the current owner is cleaned up.
/// The returned gate closes at that point.
fn rotate_while_mounted(rotation: RwSignal<RoleRotation>) -> TickGate {
    let gate = TickGate::new();
    let handle = start_role_rotation(rotation, gate.clone());
    on_cleanup(move || {
        handle.cancel();
        log::debug!("role rotation stopped");
    });
    gate
}

#[component]
pub fn HomePage() -> impl IntoView {
    let rotation = RwSignal::new(initial_rotation());
    let selection = RwSignal::new(ProjectSelection::default());

    rotate_while_mounted(rotation);

    view! {
        <Title text="Portfolio" />
        <div class="bg-gray-100 text-gray-800 min-h-screen transition-colors duration-500">
            <Header />
            <Hero rotation />
            <About />
            <Skills />
            <Projects selection />
            <Experience />
            <Education />
            <Achievements />
            <Contact />
            <ProjectModal selection />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rotation_uses_profile_roles() {
        let rotation = initial_rotation();
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.current(), PROFILE.roles[0]);
    }

    #[test]
    fn test_owner_cleanup_cancels_rotation() {
        let owner = Owner::new();
        let gate = owner.with(|| {
            let rotation = RwSignal::new(initial_rotation());
            rotate_while_mounted(rotation)
        });
        assert!(gate.is_open());

        owner.cleanup();
        assert!(!gate.is_open());
    }
}
