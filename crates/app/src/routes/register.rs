use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Form, Input, ToastOptions,
};
use std::collections::HashMap;

use crate::routes::Route;

/// Account creation. Registering does not sign the user in — on success
/// we send them to the login form.
#[component]
pub fn Register() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| async move {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = RegisterRequest {
            email: email(),
            password: password(),
            display_name: name(),
        };

        match server::api::register(request).await {
            Ok(_) => {
                toast.success(
                    "Compte créé, vous pouvez vous connecter".to_string(),
                    ToastOptions::new(),
                );
                navigator().push(Route::Login {});
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
                    CardTitle { "Créer un compte" }
                    CardDescription { "Une minute suffit pour commander vos premiers plats." }
                }
                CardContent {
                    Form { onsubmit: handle_register,
                        Input {
                            label: "Nom complet",
                            placeholder: "Jean Dupont",
                            value: name(),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        if let Some(msg) = field_errors().get("display_name") {
                            p { class: "auth-field-error", "{msg}" }
                        }

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
                            if loading() { "Création..." } else { "Créer mon compte" }
                        }
                    }

                    p { class: "auth-switch",
                        "Déjà inscrit ? "
                        Link { to: Route::Login {}, "Se connecter" }
                    }
                }
            }
        }
    }
}
