use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

use crate::guard::landing;
use crate::routes::Route;
use crate::session::use_session;

/// Login page with email/password. The public-only guard upstream
/// guarantees only guests ever see this form; after a successful login
/// we navigate to the role's landing route ourselves.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| async move {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
        };

        match server::api::login(request).await {
            Ok(user) => {
                let destination = landing(user.role);
                session.set_user(user);
                navigator().push(destination);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                CardHeader {
                    CardTitle { "Connexion" }
                    CardDescription { "Heureux de vous revoir. Vos plats vous attendent." }
                }
                CardContent {
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Adresse e-mail",
                            input_type: "email",
                            placeholder: "vous@exemple.fr",
                            value: email(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        if let Some(msg) = field_errors().get("email") {
                            p { class: "auth-field-error", "{msg}" }
                        }

                        Input {
                            label: "Mot de passe",
                            input_type: "password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = field_errors().get("password") {
                            p { class: "auth-field-error", "{msg}" }
                        }

                        if let Some(msg) = error_msg() {
                            p { class: "auth-error", "{msg}" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: loading(),
                            attributes: vec![Attribute::new("type", "submit", None, false)],
                            if loading() { "Connexion..." } else { "Se connecter" }
                        }
                    }

                    p { class: "auth-switch",
                        "Pas encore de compte ? "
                        Link { to: Route::Register {}, "Créer un compte" }
                    }
                }
            }
        }
    }
}
