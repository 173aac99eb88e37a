use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Politique de confidentialité" }
            }
            CardContent {
                p {
                    "Nous conservons uniquement les informations nécessaires au traitement "
                    "de vos commandes : nom, adresse e-mail et adresse de livraison."
                }
                p {
                    "Ces données ne sont jamais partagées avec des tiers. Vous pouvez "
                    "demander leur suppression à tout moment depuis votre compte."
                }
            }
        }
    }
}
