// 🍝 Lasagna - Recipe helpers

/// Minutes per layer when the cook doesn't say
pub const DEFAULT_MINUTES_PER_LAYER: u32 = 2;

const NOODLES_PER_LAYER_GRAMS: u32 = 50;
const SAUCE_PER_LAYER_LITERS: f64 = 0.2;

/// Total preparation time. A `minutes_per_layer` of 0 means the default.
/// Saturates at `u32::MAX` minutes.
pub fn preparation_time<S: AsRef<str>>(layers: &[S], minutes_per_layer: u32) -> u32 {
    let minutes = if minutes_per_layer == 0 {
        DEFAULT_MINUTES_PER_LAYER
    } else {
        minutes_per_layer
    };

    u32::try_from(layers.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(minutes)
}

/// Grams of noodles and liters of sauce needed for the given layers
pub fn quantities<S: AsRef<str>>(layers: &[S]) -> (u32, f64) {
    layers
        .iter()
        .fold((0, 0.0), |(noodles, sauce), layer| match layer.as_ref() {
            "noodles" => (noodles.saturating_add(NOODLES_PER_LAYER_GRAMS), sauce),
            "sauce" => (noodles, sauce + SAUCE_PER_LAYER_LITERS),
            _ => (noodles, sauce),
        })
}

/// Replace the last ingredient of `mine` with the last of `friends`.
///
/// Returns false and leaves `mine` alone if either list is empty.
pub fn add_secret_ingredient(friends: &[String], mine: &mut [String]) -> bool {
    match (friends.last(), mine.last_mut()) {
        (Some(secret), Some(last)) => {
            last.clone_from(secret);
            true
        }
        _ => false,
    }
}

/// Scale quantities written for 2 portions to `portions`
pub fn scale_recipe(quantities: &[f64], portions: u32) -> Vec<f64> {
    quantities
        .iter()
        .map(|quantity| quantity / 2.0 * f64::from(portions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preparation_time() {
        let recipe = ["sauce", "noodles", "sauce", "meat", "mozzarella", "noodles"];
        assert_eq!(preparation_time(&recipe, 3), 18);
        assert_eq!(preparation_time(&recipe, 0), 12);

        let empty: [&str; 0] = [];
        assert_eq!(preparation_time(&empty, 5), 0);
    }

    #[test]
    fn test_preparation_time_saturates() {
        assert_eq!(preparation_time(&["a", "b"], u32::MAX), u32::MAX);
        assert_eq!(preparation_time(&["a"], u32::MAX), u32::MAX);
    }

    #[test]
    fn test_quantities() {
        let (noodles, sauce) = quantities(&["sauce", "noodles", "sauce", "meat", "mozzarella", "noodles"]);
        assert_eq!(noodles, 100);
        assert!((sauce - 0.4).abs() < 1e-9);

        let (noodles, sauce) = quantities(&["meat"]);
        assert_eq!(noodles, 0);
        assert_eq!(sauce, 0.0);
    }

    #[test]
    fn test_add_secret_ingredient() {
        let friends = layers(&["noodles", "sauce", "mozzarella", "kampot pepper"]);
        let mut mine = layers(&["noodles", "meat", "sauce", "mozzarella", "?"]);

        assert!(add_secret_ingredient(&friends, &mut mine));
        assert_eq!(mine, layers(&["noodles", "meat", "sauce", "mozzarella", "kampot pepper"]));
        // friend's list is not modified
        assert_eq!(friends.len(), 4);
    }

    #[test]
    fn test_add_secret_ingredient_empty_lists() {
        let mut mine = layers(&["noodles", "?"]);
        assert!(!add_secret_ingredient(&[], &mut mine));
        assert_eq!(mine[1], "?");

        let mut nothing: Vec<String> = Vec::new();
        assert!(!add_secret_ingredient(&layers(&["basil"]), &mut nothing));
    }

    #[test]
    fn test_scale_recipe() {
        let scaled = scale_recipe(&[1.2, 3.6, 10.5], 4);
        assert_eq!(scaled.len(), 3);
        assert!((scaled[0] - 2.4).abs() < 1e-9);
        assert!((scaled[1] - 7.2).abs() < 1e-9);
        assert!((scaled[2] - 21.0).abs() < 1e-9);

        assert_eq!(scale_recipe(&[0.5], 1), vec![0.25]);
        assert!(scale_recipe(&[], 3).is_empty());
    }
}
