//! Output variants driven by optional add-on libraries.

use crate::{
    Rendered,
    template::{Placeholder, RenderContext, Section, Template},
};
use std::collections::BTreeSet;

pub const EXPERIMENTAL_ANIMATION_API: &str = "androidx.compose.animation.ExperimentalAnimationApi";

const ANIMATED_NAV_CONTROLLER: &str = "rememberAnimatedNavController()";
const NAV_CONTROLLER: &str = "rememberNavController()";

const ANIMATION_DEFAULT_PARAMS: &str = "
contentAlignment: Alignment = Alignment.Center,
enterTransition: (AnimatedContentScope<String>.(initial: NavBackStackEntry, target: NavBackStackEntry) -> EnterTransition)? =
    { _, _ -> fadeIn(animationSpec = tween(700)) },
exitTransition: (AnimatedContentScope<String>.(initial: NavBackStackEntry, target: NavBackStackEntry) -> ExitTransition)? =
    { _, _ -> fadeOut(animationSpec = tween(700)) },
popEnterTransition: (AnimatedContentScope<String>.(initial: NavBackStackEntry, target: NavBackStackEntry) -> EnterTransition)? = enterTransition,
popExitTransition: (AnimatedContentScope<String>.(initial: NavBackStackEntry, target: NavBackStackEntry) -> ExitTransition)? = exitTransition,";

const ANIMATION_PARAMS_TO_INNER: &str = "
contentAlignment = contentAlignment,
enterTransition = enterTransition,
exitTransition = exitTransition,
popEnterTransition = popEnterTransition,
popExitTransition = popExitTransition";

/// Names of the five transition parameters added with the animation library.
pub const ANIMATION_PARAMS: [&str; 5] = [
    "contentAlignment",
    "enterTransition",
    "exitTransition",
    "popEnterTransition",
    "popExitTransition",
];

///
/// Capabilities
///
/// Which optional libraries the consuming build has available.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Capabilities {
    pub animation: bool,
    pub material: bool,
}

impl Capabilities {
    #[must_use]
    pub const fn new(animation: bool, material: bool) -> Self {
        Self {
            animation,
            material,
        }
    }

    #[must_use]
    pub const fn default_nav_controller(self) -> &'static str {
        if self.animation {
            ANIMATED_NAV_CONTROLLER
        } else {
            NAV_CONTROLLER
        }
    }

    /// Opt-in marker for the generated host function, with its import.
    #[must_use]
    pub fn experimental_api(self) -> Rendered {
        if self.animation {
            Rendered::text("\n@ExperimentalAnimationApi").with_import(EXPERIMENTAL_ANIMATION_API)
        } else {
            Rendered::default()
        }
    }

    /// Extra parameters on the host function signature.
    #[must_use]
    pub const fn animation_default_params(self) -> &'static str {
        if self.animation {
            ANIMATION_DEFAULT_PARAMS
        } else {
            ""
        }
    }

    /// Arguments forwarding the extra parameters to the inner host.
    #[must_use]
    pub const fn animation_params_to_inner(self) -> &'static str {
        if self.animation {
            ANIMATION_PARAMS_TO_INNER
        } else {
            ""
        }
    }

    /// Pick the inner host body matching the animation capability.
    #[must_use]
    pub const fn inner_nav_host<'a>(self, plain: &'a Template, animated: &'a Template) -> &'a Template {
        if self.animation { animated } else { plain }
    }

    /// Fill every capability-driven placeholder and section in `ctx`.
    ///
    /// The inner host body is itself a template; it is rendered here against
    /// the same values and stored as a finished string. Returns the imports
    /// the chosen variants need.
    pub fn apply(
        self,
        ctx: &mut RenderContext,
        plain_host: &Template,
        animated_host: &Template,
    ) -> BTreeSet<String> {
        let experimental = self.experimental_api();

        ctx.set(Placeholder::DefaultNavController, self.default_nav_controller())
            .set(Placeholder::ExperimentalApi, experimental.text.as_str())
            .set(Placeholder::AnimationDefaultParams, self.animation_default_params())
            .set(Placeholder::AnimationParamsToInner1, self.animation_params_to_inner())
            .set(Placeholder::AnimationParamsToInner2, self.animation_params_to_inner());

        if self.material {
            ctx.include(Section::Scaffold);
        }

        let host = self.inner_nav_host(plain_host, animated_host).render(ctx);
        ctx.set(Placeholder::InnerNavHost, host.trim_end());

        experimental.imports
    }
}

///
/// TESTS
///
