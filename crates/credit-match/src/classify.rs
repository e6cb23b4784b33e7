//! Tiered eligibility rules.
//!
//! Every candidate lands in at most one tier and the first non-empty tier is
//! the answer. Two rule sets exist: general credit (the student needs an extra
//! lesson) and replacement (the student missed a specific class).

use credit_model::{ClassRecord, Lesson, MissedClassDescriptor, StudentProfile, Tier};

/// The rules used to place a candidate into a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet<'m> {
    /// No missed class: prefer new subjects, streams and abilities.
    General,
    /// Replace the given missed class.
    Replacement(&'m MissedClassDescriptor),
}

impl<'m> RuleSet<'m> {
    /// Picks the rule set for an optional missed class.
    pub fn for_missed_class(missed: Option<&'m MissedClassDescriptor>) -> Self {
        missed.map_or(Self::General, Self::Replacement)
    }

    /// The tier a candidate lesson belongs to, or `None` when it is discarded.
    pub fn tier_for(&self, profile: &StudentProfile, lesson: Lesson<'_>) -> Option<Tier> {
        match self {
            Self::General => general_tier(profile, lesson),
            Self::Replacement(missed) => replacement_tier(profile, lesson, missed),
        }
    }
}

fn general_tier(profile: &StudentProfile, lesson: Lesson<'_>) -> Option<Tier> {
    let coverage = &profile.coverage;
    if coverage.is_dual_stream(lesson.subject) {
        return (!coverage.covers_in_any_stream(lesson.subject, lesson.ability))
            .then_some(Tier::Tier2);
    }
    if !coverage.has_subject(lesson.subject) {
        return Some(if profile.knows_ability(lesson.ability) {
            Tier::Tier1
        } else {
            Tier::Tier3
        });
    }
    if !coverage.has_stream(lesson.subject, lesson.stream) {
        return Some(Tier::Tier1);
    }
    (!coverage.covers(lesson.subject, lesson.stream, lesson.ability)).then_some(Tier::Tier1)
}

// Tier 3 is only consulted when no candidate reached Tier 1 or 2, so taking
// the first matching predicate gives the same selection as computing each
// tier separately.
fn replacement_tier(
    profile: &StudentProfile,
    lesson: Lesson<'_>,
    missed: &MissedClassDescriptor,
) -> Option<Tier> {
    let coverage = &profile.coverage;
    let missed_is_dual = coverage.is_dual_stream(&missed.subject);

    if !missed_is_dual && lesson.subject == missed.subject && lesson.stream != missed.stream {
        return Some(Tier::Tier1);
    }
    if !coverage.is_dual_stream(lesson.subject)
        && lesson.subject != missed.subject
        && profile.knows_ability(lesson.ability)
    {
        return Some(Tier::Tier2);
    }
    if coverage.has_stream(lesson.subject, lesson.stream)
        && !coverage.covers(lesson.subject, lesson.stream, lesson.ability)
    {
        return Some(Tier::Tier3);
    }
    None
}

/// Candidates grouped by tier, each tier in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    tiers: [Vec<&'a ClassRecord>; 3],
}

impl<'a> Classification<'a> {
    fn push(&mut self, tier: Tier, class: &'a ClassRecord) {
        self.tiers[usize::from(tier.rank() - 1)].push(class);
    }

    /// Classes placed in one tier.
    pub fn tier(&self, tier: Tier) -> &[&'a ClassRecord] {
        &self.tiers[usize::from(tier.rank() - 1)]
    }

    /// The first non-empty tier and its classes.
    pub fn selected(&self) -> Option<(Tier, &[&'a ClassRecord])> {
        Tier::ALL
            .into_iter()
            .map(|tier| (tier, self.tier(tier)))
            .find(|(_, classes)| !classes.is_empty())
    }

    /// Consumes the classification, keeping only the winning tier.
    pub fn into_selected(self) -> Option<(Tier, Vec<&'a ClassRecord>)> {
        let [tier1, tier2, tier3] = self.tiers;
        [(Tier::Tier1, tier1), (Tier::Tier2, tier2), (Tier::Tier3, tier3)]
            .into_iter()
            .find(|(_, classes)| !classes.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }
}

/// Sorts the available candidates into tiers.
///
/// Candidates missing a subject, stream or ability are skipped.
pub fn classify<'a>(
    profile: &StudentProfile,
    candidates: &[&'a ClassRecord],
    rules: RuleSet<'_>,
) -> Classification<'a> {
    let mut classification = Classification::default();
    let mut skipped = 0usize;
    for &class in candidates {
        let Some(lesson) = class.lesson() else {
            skipped += 1;
            continue;
        };
        if let Some(tier) = rules.tier_for(profile, lesson) {
            classification.push(tier, class);
        }
    }
    tracing::debug!(
        student_id = %profile.student_id,
        tier1 = classification.tier(Tier::Tier1).len(),
        tier2 = classification.tier(Tier::Tier2).len(),
        tier3 = classification.tier(Tier::Tier3).len(),
        skipped,
        "candidates classified"
    );
    classification
}

#[cfg(test)]
mod tests {
    use credit_model::CoverageMap;

    use super::*;

    fn class(id: &str, subject: &str, stream: &str, ability: &str) -> ClassRecord {
        ClassRecord {
            subject: Some(subject.to_string()),
            stream: Some(stream.to_string()),
            ability: Some(ability.to_string()),
            ..ClassRecord::new(id)
        }
    }

    fn profile(enrolled: &[(&str, &str, &str)]) -> StudentProfile {
        let mut coverage = CoverageMap::new();
        for (subject, stream, ability) in enrolled {
            coverage.insert(subject, stream, ability);
        }
        StudentProfile {
            student_id: "S1".to_string(),
            abilities: enrolled
                .iter()
                .map(|(_, _, ability)| (*ability).to_string())
                .collect(),
            coverage,
            ..StudentProfile::default()
        }
    }

    fn missed(subject: &str, stream: &str) -> MissedClassDescriptor {
        MissedClassDescriptor {
            class_id: "MISSED".to_string(),
            subject: subject.to_string(),
            stream: stream.to_string(),
            ability: None,
            display_name: subject.to_string(),
        }
    }

    fn general(profile: &StudentProfile, class: &ClassRecord) -> Option<Tier> {
        RuleSet::General.tier_for(profile, class.lesson().unwrap())
    }

    #[test]
    fn general_rules_for_single_stream_subjects() {
        let student = profile(&[("Maths", "A", "Higher")]);

        assert_eq!(general(&student, &class("1", "Science", "A", "Higher")), Some(Tier::Tier1));
        assert_eq!(general(&student, &class("2", "Science", "A", "Core")), Some(Tier::Tier3));
        assert_eq!(general(&student, &class("3", "Maths", "B", "Core")), Some(Tier::Tier1));
        assert_eq!(general(&student, &class("4", "Maths", "A", "Core")), Some(Tier::Tier1));
        assert_eq!(general(&student, &class("5", "Maths", "A", "Higher")), None);
    }

    #[test]
    fn general_rules_for_dual_stream_subjects() {
        let student = profile(&[("Maths", "A", "Higher"), ("Maths", "B", "Core")]);

        assert_eq!(general(&student, &class("1", "Maths", "A", "Core")), None);
        assert_eq!(general(&student, &class("2", "Maths", "C", "Higher")), None);
        assert_eq!(
            general(&student, &class("3", "Maths", "A", "Foundation")),
            Some(Tier::Tier2)
        );
    }

    #[test]
    fn general_tier3_wins_when_only_unfamiliar_new_subjects_remain() {
        let student = profile(&[("Maths", "A", "Higher")]);
        let candidates = [class("1", "Art", "A", "Core"), class("2", "Maths", "A", "Higher")];
        let refs: Vec<_> = candidates.iter().collect();

        let result = classify(&student, &refs, RuleSet::General);

        let (tier, classes) = result.selected().unwrap();
        assert_eq!(tier, Tier::Tier3);
        assert_eq!(classes[0].id, "1");
    }

    #[test]
    fn replacement_prefers_other_stream_of_missed_subject() {
        let student = profile(&[("Maths", "A", "Higher"), ("English", "A", "Core")]);
        let missed = missed("Maths", "A");
        let rules = RuleSet::Replacement(&missed);

        let other_stream = class("1", "Maths", "B", "Foundation");
        let known_ability = class("2", "Science", "A", "Core");
        let coverage_gap = class("3", "English", "A", "Foundation");

        let tier = |c: &ClassRecord| rules.tier_for(&student, c.lesson().unwrap());
        assert_eq!(tier(&other_stream), Some(Tier::Tier1));
        assert_eq!(tier(&known_ability), Some(Tier::Tier2));
        assert_eq!(tier(&coverage_gap), Some(Tier::Tier3));
        assert_eq!(tier(&class("4", "Science", "A", "Unknown")), None);
    }

    #[test]
    fn replacement_skips_tier1_for_dual_stream_missed_subject() {
        let student = profile(&[("Maths", "A", "Higher"), ("Maths", "B", "Core")]);
        let missed = missed("Maths", "A");
        let rules = RuleSet::Replacement(&missed);

        let candidate = class("1", "Maths", "B", "Higher");
        assert_eq!(rules.tier_for(&student, candidate.lesson().unwrap()), Some(Tier::Tier3));
        let dual_other = class("2", "Maths", "C", "Higher");
        assert_eq!(rules.tier_for(&student, dual_other.lesson().unwrap()), None);
    }

    #[test]
    fn replacement_tier2_excludes_dual_stream_subjects() {
        let student = profile(&[
            ("Maths", "A", "Higher"),
            ("Science", "A", "Core"),
            ("Science", "B", "Core"),
        ]);
        let missed = missed("Maths", "A");
        let candidate = class("1", "Science", "C", "Higher");
        let rules = RuleSet::Replacement(&missed);
        assert_eq!(rules.tier_for(&student, candidate.lesson().unwrap()), None);
    }

    #[test]
    fn first_non_empty_tier_is_selected() {
        let student = profile(&[("Maths", "A", "Higher")]);
        let candidates = [
            class("T3", "Art", "A", "Core"),
            class("T1a", "Science", "A", "Higher"),
            class("T1b", "Maths", "B", "Core"),
        ];
        let refs: Vec<_> = candidates.iter().collect();

        let (tier, classes) = classify(&student, &refs, RuleSet::General)
            .into_selected()
            .unwrap();

        assert_eq!(tier, Tier::Tier1);
        let ids: Vec<_> = classes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["T1a", "T1b"]);
    }

    #[test]
    fn incomplete_candidates_are_skipped() {
        let student = profile(&[]);
        let incomplete = ClassRecord {
            subject: Some("Maths".to_string()),
            ..ClassRecord::new("1")
        };
        let result = classify(&student, &[&incomplete], RuleSet::General);
        assert!(result.is_empty());
        assert!(result.selected().is_none());
    }

    #[test]
    fn rule_set_follows_missed_class() {
        let missed = missed("Maths", "A");
        assert_eq!(RuleSet::for_missed_class(None), RuleSet::General);
        assert_eq!(
            RuleSet::for_missed_class(Some(&missed)),
            RuleSet::Replacement(&missed)
        );
    }
}
