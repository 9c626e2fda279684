use super::*;

fn reward(points: i64, stock: u32) -> Reward {
    Reward {
        id: "R999",
        name: "Test Reward",
        points,
        category: "Voucher",
        stock,
    }
}

#[test]
fn can_redeem_when_affordable_and_in_stock() {
    assert_eq!(can_redeem(1_500, &reward(200, 50)), Ok(()));
}

#[test]
fn can_redeem_exactly_at_balance() {
    assert_eq!(can_redeem(200, &reward(200, 1)), Ok(()));
}

#[test]
fn cannot_redeem_above_balance() {
    assert_eq!(can_redeem(100, &reward(200, 50)), Err("Not enough points"));
}

#[test]
fn cannot_redeem_out_of_stock() {
    assert_eq!(can_redeem(1_500, &reward(200, 0)), Err("Out of stock"));
}

#[test]
fn out_of_stock_wins_over_affordability() {
    assert_eq!(can_redeem(0, &reward(200, 0)), Err("Out of stock"));
}

#[test]
fn catalog_ids_are_unique() {
    let rewards = catalog();
    for (index, first) in rewards.iter().enumerate() {
        for second in &rewards[index + 1..] {
            assert_ne!(first.id, second.id);
        }
    }
}
