use dioxus::prelude::*;
use shared_types::Client;
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, Modal, ModalDescription, ModalFooter, ModalHeader, ModalTitle,
    PageActions, PageHeader, PageTitle, Skeleton, ToastOptions,
};

use crate::routes::Route;
use crate::services::clients::{use_client_list, use_delete_client};

/// Back-office client directory.
#[component]
pub fn ClientList() -> Element {
    let mut clients = use_client_list();
    let toast = use_toast();
    let mut confirm_delete = use_signal(|| Option::<Client>::None);

    let delete = use_delete_client(
        move |_| {
            clients.restart();
            confirm_delete.set(None);
            toast.success("Client supprimé".to_string(), ToastOptions::new());
        },
        move |err| {
            confirm_delete.set(None);
            toast.error(err.message.clone(), ToastOptions::new());
        },
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manager.css") }

        PageHeader {
            PageTitle { "Clients" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(Route::ClientForm { id: None });
                    },
                    "Ajouter un client"
                }
            }
        }

        match &*clients.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "manager-empty", "Aucun client enregistré." }
            },
            Some(Ok(list)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Nom" }
                        DataTableColumn { "E-mail" }
                        DataTableColumn { "Adresse" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for client in list.iter() {
                            DataTableRow { key: "{client.id}",
                                DataTableCell { "{client.name}" }
                                DataTableCell { "{client.email}" }
                                DataTableCell {
                                    {client.address.clone().unwrap_or_else(|| "—".to_string())}
                                }
                                DataTableCell {
                                    div { class: "manager-row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let id = client.id.clone();
                                                move |_| {
                                                    navigator().push(Route::ClientForm { id: Some(id.clone()) });
                                                }
                                            },
                                            "Modifier"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let client = client.clone();
                                                move |_| confirm_delete.set(Some(client.clone()))
                                            },
                                            "Supprimer"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                p { class: "manager-error", "{err.message}" }
            },
            None => rsx! {
                Skeleton { style: "height: 16rem;" }
            },
        }

        Modal {
            open: confirm_delete().is_some(),
            on_close: move |_| confirm_delete.set(None),
            ModalHeader {
                ModalTitle { "Supprimer le client" }
                if let Some(client) = confirm_delete() {
                    ModalDescription {
                        "Le compte de {client.name} ({client.email}) sera supprimé."
                    }
                }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| confirm_delete.set(None),
                    "Annuler"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: delete.is_pending(),
                    onclick: move |_| {
                        if let Some(client) = confirm_delete() {
                            delete.mutate(client.id);
                        }
                    },
                    "Supprimer"
                }
            }
        }
    }
}
