use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

#[component]
pub fn Terms() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Conditions d'utilisation" }
            }
            CardContent {
                p {
                    "ExpressFood met en relation nos cuisines et votre table. En passant "
                    "commande, vous acceptez que les plats soient préparés le jour même et "
                    "livrés à l'adresse indiquée sur votre compte."
                }
                p {
                    "Les prix affichés sont en euros, toutes taxes comprises. Une commande "
                    "confirmée peut être annulée tant qu'elle n'est pas en préparation."
                }
            }
        }
    }
}
