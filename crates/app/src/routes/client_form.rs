use dioxus::prelude::*;
use shared_types::{AppError, CreateClientRequest, UpdateClientRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, Input,
    PageHeader, PageTitle, Skeleton, ToastOptions,
};
use std::collections::HashMap;

use crate::routes::Route;
use crate::services::clients::{use_client, use_create_client, use_update_client};

/// Create or edit a client record. With no id the form starts blank and
/// creates; with an id it loads the client and updates.
#[component]
pub fn ClientForm(id: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manager.css") }

        match id {
            Some(id) => rsx! { EditClient { id } },
            None => rsx! { CreateClient {} },
        }
    }
}

#[component]
fn CreateClient() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let create = use_create_client(
        move |_| {
            toast.success("Client ajouté".to_string(), ToastOptions::new());
            navigator().push(Route::ClientList {});
        },
        move |err: AppError| {
            if err.field_errors.is_empty() {
                toast.error(err.message.clone(), ToastOptions::new());
            } else {
                field_errors.set(err.field_errors.clone());
            }
        },
    );

    let handle_submit = move |_: FormEvent| {
        field_errors.set(HashMap::new());
        create.mutate(CreateClientRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            address: optional_address(&address()),
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Nouveau client" }
        }
        ClientFields {
            name,
            email,
            address,
            field_errors,
            pending: create.is_pending(),
            onsubmit: handle_submit,
        }
    }
}

#[component]
fn EditClient(id: String) -> Element {
    let toast = use_toast();
    let client = use_client(id.clone());

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut hydrated = use_signal(|| false);

    // Fill the form once the record arrives, then leave the user's
    // edits alone.
    use_effect(move || {
        if hydrated() {
            return;
        }
        if let Some(Ok(record)) = &*client.read() {
            name.set(record.name.clone());
            email.set(record.email.clone());
            address.set(record.address.clone().unwrap_or_default());
            hydrated.set(true);
        }
    });

    let update = use_update_client(
        move |_| {
            toast.success("Client mis à jour".to_string(), ToastOptions::new());
            navigator().push(Route::ClientList {});
        },
        move |err: AppError| {
            if err.field_errors.is_empty() {
                toast.error(err.message.clone(), ToastOptions::new());
            } else {
                field_errors.set(err.field_errors.clone());
            }
        },
    );

    let handle_submit = {
        let id = id.clone();
        move |_: FormEvent| {
            field_errors.set(HashMap::new());
            update.mutate(UpdateClientRequest {
                id: id.clone(),
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                address: optional_address(&address()),
            });
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Modifier le client" }
        }

        match &*client.read() {
            Some(Ok(_)) => rsx! {
                ClientFields {
                    name,
                    email,
                    address,
                    field_errors,
                    pending: update.is_pending(),
                    onsubmit: handle_submit,
                }
            },
            Some(Err(err)) => rsx! {
                p { class: "manager-error", "{err.message}" }
            },
            None => rsx! {
                Skeleton { style: "height: 20rem;" }
            },
        }
    }
}

#[component]
fn ClientFields(
    name: Signal<String>,
    email: Signal<String>,
    address: Signal<String>,
    field_errors: Signal<HashMap<String, String>>,
    pending: bool,
    onsubmit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        Card { class: "manager-form-card",
            CardHeader {
                CardTitle { "Coordonnées" }
            }
            CardContent {
                Form { onsubmit: move |evt| onsubmit.call(evt),
                    Input {
                        label: "Nom",
                        value: name(),
                        on_input: move |evt: FormEvent| name.set(evt.value()),
                    }
                    if let Some(msg) = field_errors().get("name") {
                        p { class: "manager-field-error", "{msg}" }
                    }

                    Input {
                        label: "Adresse e-mail",
                        input_type: "email",
                        value: email(),
                        on_input: move |evt: FormEvent| email.set(evt.value()),
                    }
                    if let Some(msg) = field_errors().get("email") {
                        p { class: "manager-field-error", "{msg}" }
                    }

                    Input {
                        label: "Adresse de livraison (facultatif)",
                        value: address(),
                        on_input: move |evt: FormEvent| address.set(evt.value()),
                    }

                    div { class: "manager-form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                navigator().push(Route::ClientList {});
                            },
                            "Annuler"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: pending,
                            attributes: vec![Attribute::new("type", "submit", None, false)],
                            if pending { "Enregistrement..." } else { "Enregistrer" }
                        }
                    }
                }
            }
        }
    }
}

fn optional_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_address_is_dropped() {
        assert_eq!(optional_address("   "), None);
        assert_eq!(optional_address(""), None);
    }

    #[test]
    fn address_is_trimmed() {
        assert_eq!(
            optional_address("  12 rue des Lilas  "),
            Some("12 rue des Lilas".to_string())
        );
    }
}
