use super::*;

// =============================================================
// Pricing
// =============================================================

#[test]
fn monthly_price_is_the_base_price() {
    assert_eq!(price_cents(900, false), 900);
}

#[test]
fn yearly_price_charges_ten_months() {
    assert_eq!(price_cents(900, true), 9000);
    assert_eq!(price_cents(1900, true), 19000);
}

#[test]
fn free_plan_stays_free_on_any_cycle() {
    assert_eq!(price_label(0, false), "Free");
    assert_eq!(price_label(0, true), "Free");
}

#[test]
fn price_labels_format_dollars_and_period() {
    assert_eq!(price_label(900, false), "$9.00/mo");
    assert_eq!(price_label(1900, true), "$190.00/yr");
}

#[test]
fn odd_cent_amounts_pad_correctly() {
    assert_eq!(price_label(905, false), "$9.05/mo");
}
