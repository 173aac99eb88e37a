pub mod cart_page;
pub mod checkout;
pub mod client_form;
pub mod clients;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod manage_recipes;
pub mod menu;
pub mod not_found;
pub mod order_history;
pub mod privacy;
pub mod recipe_detail;
pub mod register;
pub mod terms;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChefHat, LdClipboardList, LdLayoutDashboard, LdLogOut, LdShoppingCart, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger,
};

use crate::cart::use_cart;
use crate::guard::{protected, public_only, GuardDecision};
use crate::session::{use_session, SessionPhase};

use cart_page::CartPage;
use checkout::Checkout;
use client_form::ClientForm;
use clients::ClientList;
use dashboard::Dashboard;
use home::Home;
use login::Login;
use manage_recipes::ManageRecipes;
use menu::Menu;
use not_found::NotFound;
use order_history::OrderHistory;
use privacy::Privacy;
use recipe_detail::RecipeDetail;
use register::Register;
use terms::Terms;

/// Application routes. Customer pages live under the site layout; the
/// back-office pages sit behind the admin guard with their own layout.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SessionResolver)]
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/recettes")]
    Menu {},
    #[route("/recettes/:id")]
    RecipeDetail { id: String },
    #[route("/panier")]
    CartPage {},
    #[route("/terms")]
    Terms {},
    #[route("/privacy")]
    Privacy {},
    #[layout(PublicOnly)]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[end_layout]
    #[layout(RequireUser)]
    #[route("/listcommande")]
    OrderHistory {},
    #[route("/commande")]
    Checkout {},
    #[end_layout]
    #[end_layout]
    #[layout(RequireAdmin)]
    #[layout(ManagerLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/listClients")]
    ClientList {},
    #[route("/gestionRecettes")]
    ManageRecipes {},
    #[route("/client?:id")]
    ClientForm { id: Option<String> },
    #[end_layout]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolves the session cookie exactly once per page load.
///
/// Uses `use_server_future` with `?` to propagate suspension: during SSR
/// the component suspends until the session check completes, and the
/// `SuspenseBoundary` in `App` shows the fallback. Guests and resolution
/// failures both land on `Guest` — the guards downstream decide what
/// that means per route.
#[component]
fn SessionResolver() -> Element {
    let mut session = use_session();

    let resource = use_server_future(move || async move { server::api::current_user().await })?;

    let resolved = match resource.read().as_ref() {
        Some(Ok(Some(user))) => Some(Some(user.clone())),
        Some(Ok(None)) | Some(Err(_)) => Some(None),
        None => None,
    };
    let next = apply_resolved_session(&session.phase.read(), resolved);
    if let Some(phase) = next {
        session.phase.set(phase);
    }

    rsx! { Outlet::<Route> {} }
}

/// Phase to write once the session lookup settles, if any.
///
/// The cached lookup applies only while the phase is still `Unknown`.
/// Once login or logout has written the phase, the page-load resolution
/// is stale — re-applying it after logout would sign the user back in
/// from a cleared cookie.
fn apply_resolved_session(
    current: &SessionPhase,
    resolved: Option<Option<shared_types::AuthUser>>,
) -> Option<SessionPhase> {
    if *current != SessionPhase::Unknown {
        return None;
    }
    match resolved {
        Some(Some(user)) => Some(SessionPhase::Authenticated(user)),
        Some(None) => Some(SessionPhase::Guest),
        None => None,
    }
}

/// Renders a guard decision: the outlet, a redirect, or a holding
/// placeholder while the session is still unresolved.
fn render_guard(decision: GuardDecision) -> Element {
    match decision {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(target) => {
            navigator().push(target);
            rsx! {
                div { class: "session-loading",
                    p { "Redirection..." }
                }
            }
        }
        GuardDecision::Pending => rsx! {
            div { class: "session-loading",
                p { "Chargement..." }
            }
        },
    }
}

/// Guard for customer-only pages (order history, checkout).
#[component]
fn RequireUser() -> Element {
    let session = use_session();
    let decision = protected(&session.phase.read(), Role::User, Route::Home {});
    render_guard(decision)
}

/// Guard for the back-office. A signed-in customer without the admin
/// role falls back to Home — never to login, which would loop.
#[component]
fn RequireAdmin() -> Element {
    let session = use_session();
    let decision = protected(&session.phase.read(), Role::Admin, Route::Home {});
    render_guard(decision)
}

/// Guard for login/register: signed-in users are sent to their landing
/// route instead of being shown the form again.
#[component]
fn PublicOnly() -> Element {
    let session = use_session();
    let decision = public_only(&session.phase.read());
    render_guard(decision)
}

fn sign_out(mut session: crate::session::SessionState) {
    spawn(async move {
        if server::api::logout().await.is_ok() {
            session.set_guest();
            navigator().push(Route::Home {});
        }
    });
}

/// Customer-facing layout: top navbar with cart badge, outlet, footer.
#[component]
fn SiteLayout() -> Element {
    let session = use_session();
    let cart = use_cart();
    let item_count = cart.item_count();
    let route: Route = use_route();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand",
                Icon::<LdChefHat> { icon: LdChefHat, width: 22, height: 22 }
                span { "ExpressFood" }
            }

            nav { class: "site-nav",
                Link {
                    to: Route::Home {},
                    class: nav_class(matches!(route, Route::Home {})),
                    "Accueil"
                }
                Link {
                    to: Route::Menu {},
                    class: nav_class(matches!(route, Route::Menu {} | Route::RecipeDetail { .. })),
                    "La carte"
                }
                if session.is_authenticated() && !session.is_admin() {
                    Link {
                        to: Route::OrderHistory {},
                        class: nav_class(matches!(route, Route::OrderHistory {})),
                        "Mes commandes"
                    }
                }
            }

            div { class: "site-header-actions",
                Link { to: Route::CartPage {}, class: "cart-link",
                    Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 20, height: 20 }
                    if item_count > 0 {
                        Badge { variant: BadgeVariant::Primary, "{item_count}" }
                    }
                }

                if session.is_authenticated() {
                    DropdownMenu {
                        DropdownMenuTrigger {
                            Avatar {
                                AvatarFallback {
                                    {initials(&session.display_name().unwrap_or_default())}
                                }
                            }
                        }
                        DropdownMenuContent {
                            if session.is_admin() {
                                DropdownMenuItem::<String> {
                                    value: "dashboard".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        navigator().push(Route::Dashboard {});
                                    },
                                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                                    "Tableau de bord"
                                }
                                DropdownMenuSeparator {}
                            }
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 1usize,
                                on_select: move |_: String| sign_out(session),
                                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                "Déconnexion"
                            }
                        }
                    }
                } else {
                    Link { to: Route::Login {}, class: "site-header-link", "Connexion" }
                    Link {
                        to: Route::Register {},
                        class: "site-header-link site-header-link-strong",
                        "Inscription"
                    }
                }
            }
        }

        main { class: "site-main",
            Outlet::<Route> {}
        }

        footer { class: "site-footer",
            span { "© 2026 ExpressFood" }
            nav {
                Link { to: Route::Terms {}, "Conditions d'utilisation" }
                Link { to: Route::Privacy {}, "Confidentialité" }
            }
        }
    }
}

/// Back-office layout for managers.
#[component]
fn ManagerLayout() -> Element {
    let session = use_session();
    let route: Route = use_route();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "manager-shell",
            aside { class: "manager-sidebar",
                Link { to: Route::Dashboard {}, class: "site-brand",
                    Icon::<LdChefHat> { icon: LdChefHat, width: 22, height: 22 }
                    span { "ExpressFood" }
                }

                nav { class: "manager-nav",
                    Link {
                        to: Route::Dashboard {},
                        class: manager_nav_class(matches!(route, Route::Dashboard {})),
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Tableau de bord"
                    }
                    Link {
                        to: Route::ManageRecipes {},
                        class: manager_nav_class(matches!(route, Route::ManageRecipes {})),
                        Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                        "Recettes"
                    }
                    Link {
                        to: Route::ClientList {},
                        class: manager_nav_class(matches!(
                            route,
                            Route::ClientList {} | Route::ClientForm { .. }
                        )),
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Clients"
                    }
                }

                div { class: "manager-sidebar-footer",
                    Link { to: Route::Home {}, class: "manager-nav-link", "Voir le site" }
                    button {
                        class: "manager-nav-link manager-logout",
                        onclick: move |_| sign_out(session),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Déconnexion"
                    }
                }
            }

            main { class: "manager-main",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "site-nav-link site-nav-link-active"
    } else {
        "site-nav-link"
    }
}

fn manager_nav_class(active: bool) -> &'static str {
    if active {
        "manager-nav-link manager-nav-link-active"
    } else {
        "manager-nav-link"
    }
}

/// First letters of up to two name words, for the avatar fallback.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AuthUser;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            id: "u-1".to_string(),
            email: "jean@example.fr".to_string(),
            display_name: "Jean Dupont".to_string(),
            role,
        }
    }

    #[test]
    fn resolution_applies_while_phase_is_unknown() {
        let u = user(Role::User);
        assert_eq!(
            apply_resolved_session(&SessionPhase::Unknown, Some(Some(u.clone()))),
            Some(SessionPhase::Authenticated(u))
        );
        assert_eq!(
            apply_resolved_session(&SessionPhase::Unknown, Some(None)),
            Some(SessionPhase::Guest)
        );
    }

    #[test]
    fn resolution_waits_while_lookup_is_pending() {
        assert_eq!(apply_resolved_session(&SessionPhase::Unknown, None), None);
    }

    #[test]
    fn cached_resolution_does_not_resurrect_a_signed_out_session() {
        // Page loaded signed in, then the user logged out: the phase is
        // Guest and the lookup still holds the old user. It must not
        // be re-applied.
        let stale = user(Role::Admin);
        assert_eq!(
            apply_resolved_session(&SessionPhase::Guest, Some(Some(stale))),
            None
        );
    }

    #[test]
    fn cached_resolution_does_not_override_a_fresh_login() {
        let cached_guest = apply_resolved_session(
            &SessionPhase::Authenticated(user(Role::User)),
            Some(None),
        );
        assert_eq!(cached_guest, None);
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Jean Dupont"), "JD");
        assert_eq!(initials("amélie"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn active_nav_class_switches_on_match() {
        assert_eq!(nav_class(true), "site-nav-link site-nav-link-active");
        assert_eq!(nav_class(false), "site-nav-link");
    }
}
