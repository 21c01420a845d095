use super::config::SimilarityMode;

/// Percentage of `reference` covered by `tech_stack`.
///
/// Every matching entry counts, duplicates included, comparing
/// case-insensitively. An empty reference set rates 0.
pub(crate) fn similarity_rate(
    tech_stack: &[String],
    reference: &[String],
    mode: SimilarityMode,
) -> u32 {
    let matched = tech_stack
        .iter()
        .filter(|entry| {
            reference
                .iter()
                .any(|skill| skill.to_lowercase() == entry.to_lowercase())
        })
        .count();

    rate(matched, reference.len(), mode)
}

/// Saturates at `u32::MAX` instead of overflowing on oversized stacks.
fn rate(matched: usize, size: usize, mode: SimilarityMode) -> u32 {
    if size == 0 {
        return 0;
    }

    let percent = match mode {
        SimilarityMode::Truncating => (matched / size).saturating_mul(100),
        SimilarityMode::Proportional => matched.saturating_mul(100) / size,
    };
    u32::try_from(percent).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    fn reference() -> Vec<String> {
        stack(&["C#", "RabbitMQ", "Microservice", "Visual Studio"])
    }

    #[test]
    fn full_match_is_one_hundred_percent_in_both_modes() {
        let applicant = stack(&["c#", "RABBITMQ", "Microservice", "visual studio"]);
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Truncating),
            100
        );
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Proportional),
            100
        );
    }

    #[test]
    fn truncating_mode_collapses_partial_matches_to_zero() {
        let applicant = stack(&["C#", "RabbitMQ", "Microservice", "Rust"]);
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Truncating),
            0
        );
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Proportional),
            75
        );
    }

    #[test]
    fn duplicates_count_towards_the_rate() {
        let applicant = stack(&["C#", "c#", "C#", "C#", "C#"]);
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Truncating),
            100
        );
        assert_eq!(
            similarity_rate(&applicant, &reference(), SimilarityMode::Proportional),
            125
        );
    }

    #[test]
    fn empty_inputs_rate_zero() {
        assert_eq!(
            similarity_rate(&[], &reference(), SimilarityMode::Proportional),
            0
        );
        assert_eq!(
            similarity_rate(&stack(&["C#"]), &[], SimilarityMode::Proportional),
            0
        );
        assert_eq!(
            similarity_rate(&stack(&[""]), &reference(), SimilarityMode::Truncating),
            0
        );
    }

    #[test]
    fn oversized_stacks_saturate_instead_of_overflowing() {
        assert_eq!(rate(usize::MAX, 4, SimilarityMode::Proportional), u32::MAX);
        assert_eq!(rate(usize::MAX, 1, SimilarityMode::Truncating), u32::MAX);
        assert_eq!(rate(50_000_000, 4, SimilarityMode::Proportional), 1_250_000_000);
    }
}
