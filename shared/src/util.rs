/// Generate a 6-digit numeric product id as a string.
///
/// Uniform in [100000, 999999]. Uniqueness is owned by the catalog
/// service; callers submit the id without checking for collisions.
pub fn generate_product_id() -> String {
    use rand::Rng;
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_product_id_is_six_digits_in_range() {
        for _ in 0..200 {
            let id = generate_product_id();
            assert_eq!(id.len(), 6);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
            let n: u32 = id.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }
}
