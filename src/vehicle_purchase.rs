// 🚗 Vehicle Purchase - License rules, choosing, resale value

/// Only cars and trucks need a license
pub fn needs_license(kind: &str) -> bool {
    matches!(kind, "car" | "truck")
}

/// Recommends whichever option sorts first
pub fn choose_vehicle(option1: &str, option2: &str) -> String {
    let choice = if option1 < option2 { option1 } else { option2 };
    format!("{} is clearly the better choice.", choice)
}

/// Resale value: 80% under 3 years, 50% from 10 years, 70% in between
pub fn calculate_resell_price(original_price: f64, age: f64) -> f64 {
    let rate = if age < 3.0 {
        0.80
    } else if age >= 10.0 {
        0.50
    } else {
        0.70
    };

    original_price * rate
}
