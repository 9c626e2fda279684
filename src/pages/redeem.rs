//! Reward-redemption page: catalog cards gated by balance and stock.
//!
//! The catalog and balance are placeholder data; actual redemption
//! settlement belongs to the backend service.

#[cfg(test)]
#[path = "redeem_test.rs"]
mod redeem_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::util::format::format_points;

/// A redeemable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reward {
    pub id: &'static str,
    pub name: &'static str,
    pub points: i64,
    pub category: &'static str,
    pub stock: u32,
}

const PLACEHOLDER_BALANCE: i64 = 1_500;

fn catalog() -> Vec<Reward> {
    vec![
        Reward {
            id: "R001",
            name: "10% Discount Voucher",
            points: 200,
            category: "Voucher",
            stock: 50,
        },
        Reward {
            id: "R002",
            name: "Gift Card",
            points: 500,
            category: "Gift Card",
            stock: 25,
        },
        Reward {
            id: "R003",
            name: "Canvas Tote Bag",
            points: 800,
            category: "Merchandise",
            stock: 15,
        },
        Reward {
            id: "R004",
            name: "20% Discount Voucher",
            points: 400,
            category: "Voucher",
            stock: 30,
        },
        Reward {
            id: "R005",
            name: "Insulated Tumbler",
            points: 1_200,
            category: "Merchandise",
            stock: 10,
        },
    ]
}

/// Check redemption eligibility before offering the confirm button.
fn can_redeem(balance: i64, reward: &Reward) -> Result<(), &'static str> {
    if reward.stock == 0 {
        return Err("Out of stock");
    }
    if reward.points > balance {
        return Err("Not enough points");
    }
    Ok(())
}

#[component]
pub fn RedeemPage() -> impl IntoView {
    let info = RwSignal::new(String::new());
    let balance = PLACEHOLDER_BALANCE;

    view! {
        <AppLayout>
            <div class="redeem-page">
                <h1>"Redeem points"</h1>
                <p class="redeem-page__balance">
                    "Available balance: " <strong>{format_points(balance)}</strong> " points"
                </p>
                <Show when=move || !info.get().is_empty()>
                    <p class="redeem-page__message">{move || info.get()}</p>
                </Show>
                <div class="redeem-page__grid">
                    {catalog()
                        .into_iter()
                        .map(|reward| {
                            let gate = can_redeem(balance, &reward);
                            let reward_name = reward.name;
                            let on_redeem = move |_| {
                                info.set(format!("Redemption request sent for {reward_name}."));
                            };
                            view! {
                                <div class="reward-card">
                                    <span class="reward-card__category">{reward.category}</span>
                                    <h2 class="reward-card__name">{reward.name}</h2>
                                    <p class="reward-card__cost">
                                        {format_points(reward.points)} " points"
                                    </p>
                                    <p class="reward-card__stock">
                                        {reward.stock} " left in stock"
                                    </p>
                                    {match gate {
                                        Ok(()) => view! {
                                            <button class="reward-card__button" on:click=on_redeem>
                                                "Redeem"
                                            </button>
                                        }
                                            .into_any(),
                                        Err(reason) => view! {
                                            <button class="reward-card__button" disabled=true>
                                                {reason}
                                            </button>
                                        }
                                            .into_any(),
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </AppLayout>
    }
}
