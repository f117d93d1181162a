//! Keyword rules mapping a prompt to a template id.
//!
//! Matching is deliberately crude: the prompt is lowercased, then each rule
//! is tried in order and the first rule with any trigger contained in the
//! prompt wins. Plain substring containment, no tokenization and no word
//! boundaries: a prompt containing "미비밀번호타" still selects the password
//! template because "비밀번호" sits inside it. That false-positive behavior
//! is part of the product contract and must not be tightened here.

use crate::types::TemplateId;

/// One keyword rule: any trigger contained in the prompt selects `template`.
#[derive(Debug, Clone)]
pub struct Rule {
    triggers: Vec<String>,
    template: TemplateId,
}

impl Rule {
    /// Triggers are stored lowercase. Prompts are lowercased before
    /// matching, so a mixed-case trigger could otherwise never match.
    pub fn new<I, S>(triggers: I, template: TemplateId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            template,
        }
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}

/// Ordered, immutable rule list. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// A substitute rule list, mostly for tests.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The two built-in rules, checked in this order.
    pub fn builtin() -> Self {
        Self::new(vec![
            Rule::new(["재고", "inventory"], TemplateId::InventoryPage),
            Rule::new(["비밀번호", "password"], TemplateId::PasswordPage),
        ])
    }

    /// Select the template id for `prompt`.
    ///
    /// Total over all inputs: an absent prompt counts as empty, and a prompt
    /// matching no rule yields `None`. Never fails, never allocates beyond
    /// the lowercased copy of the prompt.
    pub fn select(&self, prompt: Option<&str>) -> Option<TemplateId> {
        let normalized = prompt.unwrap_or("").to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::builtin()
    }

    #[test]
    fn korean_inventory_prompt_selects_inventory() {
        assert_eq!(
            rules().select(Some("재고 현황을 보고 싶어요")),
            Some(TemplateId::InventoryPage)
        );
    }

    #[test]
    fn english_inventory_match_is_case_insensitive() {
        assert_eq!(
            rules().select(Some("INVENTORY dashboard please")),
            Some(TemplateId::InventoryPage)
        );
    }

    #[test]
    fn korean_password_prompt_selects_password() {
        assert_eq!(
            rules().select(Some("비밀번호 바꾸고 싶어요")),
            Some(TemplateId::PasswordPage)
        );
    }

    #[test]
    fn english_password_prompt_selects_password() {
        assert_eq!(
            rules().select(Some("change my password")),
            Some(TemplateId::PasswordPage)
        );
    }

    #[test]
    fn unrelated_prompt_selects_nothing() {
        assert_eq!(rules().select(Some("날씨 알려줘")), None);
    }

    #[test]
    fn absent_and_empty_prompts_select_nothing() {
        assert_eq!(rules().select(None), None);
        assert_eq!(rules().select(Some("")), None);
    }

    #[test]
    fn inventory_rule_wins_when_both_keywords_present() {
        // Rule order is fixed: inventory is checked before password.
        assert_eq!(
            rules().select(Some("재고와 비밀번호 둘 다")),
            Some(TemplateId::InventoryPage)
        );
    }

    #[test]
    fn matching_ignores_word_boundaries() {
        // The trigger may sit inside a longer word.
        assert_eq!(
            rules().select(Some("미비밀번호타")),
            Some(TemplateId::PasswordPage)
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let set = rules();
        let first = set.select(Some("inventory report"));
        for _ in 0..10 {
            assert_eq!(set.select(Some("inventory report")), first);
        }
    }

    #[test]
    fn substitute_rule_set_normalizes_trigger_case() {
        let set = RuleSet::new(vec![Rule::new(["WeAtHeR"], TemplateId::InventoryPage)]);
        assert_eq!(
            set.select(Some("Weather report")),
            Some(TemplateId::InventoryPage)
        );
    }

    #[test]
    fn empty_rule_set_never_matches() {
        let set = RuleSet::new(Vec::new());
        assert_eq!(set.select(Some("inventory")), None);
    }
}
