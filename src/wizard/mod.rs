//! Question flow for collecting a profile.
//!
//! A [`Wizard`] is an immutable snapshot: every operation consumes it and
//! returns the next snapshot. The step index and the "confirming" flag are
//! both derived from the [`Stage`], so they can never disagree.

use serde::Serialize;

use crate::profile::{DietPreference, Equipment, ProfileDraft, TrainingMethod, WeightUnit};
use crate::provider::PlanProvider;
use crate::wire::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepId {
    FullName,
    Email,
    Phone,
    Weight,
    GoalWeight,
    TrainingMethod,
    Equipment,
    DietPreferences,
    Confirmation,
    Generating,
    Plan,
}

impl StepId {
    pub const ALL: [StepId; 11] = [
        StepId::FullName,
        StepId::Email,
        StepId::Phone,
        StepId::Weight,
        StepId::GoalWeight,
        StepId::TrainingMethod,
        StepId::Equipment,
        StepId::DietPreferences,
        StepId::Confirmation,
        StepId::Generating,
        StepId::Plan,
    ];

    /// Number of question steps before the final review.
    pub const QUESTION_COUNT: usize = 8;

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            StepId::FullName => "fullName",
            StepId::Email => "email",
            StepId::Phone => "phone",
            StepId::Weight => "weight",
            StepId::GoalWeight => "goalWeight",
            StepId::TrainingMethod => "trainingMethod",
            StepId::Equipment => "equipment",
            StepId::DietPreferences => "dietPreferences",
            StepId::Confirmation => "confirmation",
            StepId::Generating => "generating",
            StepId::Plan => "plan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StepId::FullName => "What's your Full Name?",
            StepId::Email => "What's your Email Address?",
            StepId::Phone => "What's your Phone Number?",
            StepId::Weight => "What's your Current Weight?",
            StepId::GoalWeight => "What's your Goal Weight?",
            StepId::TrainingMethod => "What's your Preferred Training Method?",
            StepId::Equipment => "What Equipment do you have Access to?",
            StepId::DietPreferences => "What are your Diet Preferences or Constraints?",
            StepId::Confirmation => "Please confirm your information",
            StepId::Generating => "Generating your personalized plan...",
            StepId::Plan => "Your 7-Day Personalized Fitness & Nutrition Blueprint",
        }
    }

    pub fn is_question(self) -> bool {
        self.index() < Self::QUESTION_COUNT
    }

    /// Validity rule for a step; the review, generating and plan steps have
    /// none and always pass.
    pub fn is_satisfied_by(self, draft: &ProfileDraft) -> bool {
        match self {
            StepId::FullName => draft.name_is_valid(),
            StepId::Email => draft.email_is_valid(),
            StepId::Phone => draft.phone_is_valid(),
            StepId::Weight => draft.current_weight_value().is_some(),
            StepId::GoalWeight => draft.goal_weight_value().is_some(),
            StepId::TrainingMethod => draft.training_method.is_some(),
            StepId::Equipment => draft.equipment.is_some(),
            StepId::DietPreferences => !draft.diet_preferences.is_empty(),
            StepId::Confirmation | StepId::Generating | StepId::Plan => true,
        }
    }

    fn next_question(self) -> Option<Self> {
        Self::from_index(self.index() + 1).filter(|s| s.is_question())
    }

    fn prev_question(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Waiting for an answer to a question.
    DataEntry(StepId),
    /// Showing "You entered: ..." with Edit / Next.
    ReviewingAnswer(StepId),
    /// Review of every answer before generation.
    FinalConfirm,
    Generating,
    GenerationFailed { reason: String },
    Done(Box<Plan>),
}

impl Stage {
    pub fn step(&self) -> StepId {
        match self {
            Stage::DataEntry(s) | Stage::ReviewingAnswer(s) => *s,
            Stage::FinalConfirm => StepId::Confirmation,
            Stage::Generating | Stage::GenerationFailed { .. } => StepId::Generating,
            Stage::Done(_) => StepId::Plan,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Stage::DataEntry(_) => "data_entry",
            Stage::ReviewingAnswer(_) => "reviewing_answer",
            Stage::FinalConfirm => "final_confirm",
            Stage::Generating => "generating",
            Stage::GenerationFailed { .. } => "generation_failed",
            Stage::Done(_) => "done",
        }
    }
}

/// One attribute write. Constructing the value is the only validation a
/// write ever sees.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    CurrentWeight(String),
    GoalWeight(String),
    WeightUnit(WeightUnit),
    TrainingMethod(TrainingMethod),
    Equipment(Equipment),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub id: StepId,
    pub title: &'static str,
    pub is_confirming: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    stage: Stage,
    draft: ProfileDraft,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_draft(ProfileDraft::default())
    }

    /// Start at the first question with some answers pre-filled.
    pub fn with_draft(draft: ProfileDraft) -> Self {
        Self { stage: Stage::DataEntry(StepId::FullName), draft }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn step_index(&self) -> usize {
        self.stage.step().index()
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.stage, Stage::ReviewingAnswer(_))
    }

    pub fn is_current_step_valid(&self) -> bool {
        self.stage.step().is_satisfied_by(&self.draft)
    }

    pub fn current_step(&self) -> StepView {
        let id = self.stage.step();
        StepView {
            id,
            title: id.title(),
            is_confirming: self.is_confirming(),
            is_valid: self.is_current_step_valid(),
        }
    }

    /// `(n, total)` for "Question n of total"; `None` past the questions.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let step = self.stage.step();
        step.is_question().then(|| (step.index() + 1, StepId::QUESTION_COUNT))
    }

    /// The current answer as shown back to the user.
    pub fn step_value(&self) -> String {
        let d = &self.draft;
        match self.stage.step() {
            StepId::FullName => d.full_name.clone(),
            StepId::Email => d.email.clone(),
            StepId::Phone => d.phone.clone(),
            StepId::Weight => format!("{} {}", d.current_weight, d.weight_unit),
            StepId::GoalWeight => format!("{} {}", d.goal_weight, d.weight_unit),
            StepId::TrainingMethod => d.training_method.map(|m| m.label().to_string()).unwrap_or_default(),
            StepId::Equipment => d.equipment.map(|e| e.label().to_string()).unwrap_or_default(),
            StepId::DietPreferences => d.diet_summary(),
            StepId::Confirmation | StepId::Generating | StepId::Plan => String::new(),
        }
    }

    pub fn plan(&self) -> Option<&Plan> {
        match &self.stage {
            Stage::Done(plan) => Some(&**plan),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.stage {
            Stage::GenerationFailed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn update_field(mut self, update: FieldUpdate) -> Self {
        let d = &mut self.draft;
        match update {
            FieldUpdate::FullName(v) => d.full_name = v,
            FieldUpdate::Email(v) => d.email = v,
            FieldUpdate::Phone(v) => d.phone = v,
            FieldUpdate::CurrentWeight(v) => d.current_weight = v,
            FieldUpdate::GoalWeight(v) => d.goal_weight = v,
            FieldUpdate::WeightUnit(u) => d.weight_unit = u,
            FieldUpdate::TrainingMethod(m) => d.training_method = Some(m),
            FieldUpdate::Equipment(e) => d.equipment = Some(e),
        }
        self
    }

    pub fn toggle_diet_preference(mut self, pref: DietPreference) -> Self {
        self.draft = self.draft.toggle_diet_preference(pref);
        self
    }

    /// "Next". On a question this only opens the review of the answer; the
    /// step pointer moves on `confirm_yes`.
    pub fn advance(self) -> Self {
        match self.stage {
            Stage::DataEntry(step) if step.is_satisfied_by(&self.draft) => {
                self.into_stage(Stage::ReviewingAnswer(step))
            }
            Stage::ReviewingAnswer(_) | Stage::FinalConfirm => self.confirm_yes(),
            _ => self,
        }
    }

    pub fn confirm_yes(self) -> Self {
        match self.stage {
            Stage::ReviewingAnswer(step) => {
                let next = match step.next_question() {
                    Some(next) => Stage::DataEntry(next),
                    None => Stage::FinalConfirm,
                };
                self.into_stage(next)
            }
            // Generation itself is driven by `generate_plan`.
            Stage::FinalConfirm | Stage::GenerationFailed { .. } => self.into_stage(Stage::Generating),
            _ => self,
        }
    }

    /// "Edit" on the answer review.
    pub fn confirm_no(self) -> Self {
        match self.stage {
            Stage::ReviewingAnswer(step) => self.into_stage(Stage::DataEntry(step)),
            _ => self,
        }
    }

    pub fn go_back(self) -> Self {
        match self.stage {
            Stage::ReviewingAnswer(step) => self.into_stage(Stage::DataEntry(step)),
            Stage::DataEntry(step) => match step.prev_question() {
                Some(prev) => self.into_stage(Stage::DataEntry(prev)),
                None => self,
            },
            Stage::FinalConfirm => self.into_stage(Stage::DataEntry(StepId::DietPreferences)),
            Stage::GenerationFailed { .. } => self.into_stage(Stage::FinalConfirm),
            Stage::Generating | Stage::Done(_) => self,
        }
    }

    /// Run generation for the current draft. Only meaningful once the
    /// questions are behind; a rerun replaces any earlier plan or failure.
    pub async fn generate_plan(self, provider: &dyn PlanProvider) -> Self {
        if !matches!(self.stage, Stage::Generating | Stage::GenerationFailed { .. } | Stage::Done(_)) {
            tracing::debug!(stage = self.stage.name(), "generate_plan ignored outside generation");
            return self;
        }

        let profile = match self.draft.complete() {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "cannot generate plan from incomplete profile");
                return self.into_stage(Stage::GenerationFailed { reason: e.to_string() });
            }
        };

        tracing::info!(name = %profile.full_name, "generating plan");
        match provider.generate(&profile).await {
            Ok(plan) => {
                tracing::info!(days = plan.days.len(), weight_loss = plan.is_weight_loss, "plan ready");
                self.into_stage(Stage::Done(Box::new(plan)))
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "error generating plan");
                self.into_stage(Stage::GenerationFailed { reason: format!("{e:#}") })
            }
        }
    }

    fn into_stage(mut self, stage: Stage) -> Self {
        tracing::debug!(from = self.stage.name(), to = stage.name(), step = stage.step().id(), "wizard transition");
        self.stage = stage;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{alex_draft, UserProfile};
    use crate::provider::make_provider;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl PlanProvider for FailingProvider {
        async fn generate(&self, _profile: &UserProfile) -> anyhow::Result<Plan> {
            Err(anyhow!("upstream unavailable"))
        }
    }

    fn at_final_confirm() -> Wizard {
        let mut w = Wizard::with_draft(alex_draft());
        for _ in 0..StepId::QUESTION_COUNT {
            w = w.advance().confirm_yes();
        }
        assert_eq!(w.stage(), &Stage::FinalConfirm);
        w
    }

    #[test]
    fn starts_at_first_question() {
        let w = Wizard::new();
        assert_eq!(w.step_index(), 0);
        assert!(!w.is_confirming());
        assert_eq!(
            w.current_step(),
            StepView { id: StepId::FullName, title: "What's your Full Name?", is_confirming: false, is_valid: false }
        );
        assert_eq!(w.progress(), Some((1, 8)));
    }

    #[test]
    fn step_table_is_fixed() {
        let ids: Vec<_> = StepId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            [
                "fullName", "email", "phone", "weight", "goalWeight", "trainingMethod", "equipment",
                "dietPreferences", "confirmation", "generating", "plan"
            ]
        );
        for (i, s) in StepId::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(StepId::from_index(i), Some(*s));
        }
        assert_eq!(StepId::from_index(11), None);
    }

    #[test]
    fn first_advance_only_opens_review() {
        let w = Wizard::with_draft(alex_draft());
        for step in &StepId::ALL[..StepId::QUESTION_COUNT] {
            let w = Wizard { stage: Stage::DataEntry(*step), draft: w.draft().clone() };
            let reviewed = w.clone().advance();
            assert_eq!(reviewed.step_index(), w.step_index(), "{step:?}");
            assert!(reviewed.is_confirming());
            assert_eq!(reviewed.confirm_yes().step_index(), step.index() + 1);
        }
    }

    #[test]
    fn invalid_answer_blocks_advance() {
        let w = Wizard::new().update_field(FieldUpdate::FullName("   ".into()));
        assert!(!w.is_current_step_valid());
        let w = w.advance();
        assert_eq!(w.stage(), &Stage::DataEntry(StepId::FullName));

        let w = w.update_field(FieldUpdate::FullName("Alex".into())).advance();
        assert_eq!(w.stage(), &Stage::ReviewingAnswer(StepId::FullName));
        assert_eq!(w.step_value(), "Alex");
    }

    #[test]
    fn edit_returns_to_same_question() {
        let w = Wizard::with_draft(alex_draft()).advance().confirm_yes().advance();
        assert_eq!(w.stage(), &Stage::ReviewingAnswer(StepId::Email));
        let edited = w.clone().confirm_no();
        assert_eq!(edited.stage(), &Stage::DataEntry(StepId::Email));
        assert_eq!(w.go_back().stage(), &Stage::DataEntry(StepId::Email));
    }

    #[test]
    fn back_at_first_step_is_noop() {
        let w = Wizard::new();
        assert_eq!(w.clone().go_back(), w);
    }

    #[test]
    fn back_walks_questions_and_leaves_review() {
        let w = at_final_confirm().go_back();
        assert_eq!(w.stage(), &Stage::DataEntry(StepId::DietPreferences));
        let w = w.go_back().go_back();
        assert_eq!(w.stage(), &Stage::DataEntry(StepId::TrainingMethod));
    }

    #[test]
    fn step_values_render_units_and_lists() {
        let draft = alex_draft();
        let w = Wizard { stage: Stage::DataEntry(StepId::Weight), draft: draft.clone() };
        assert_eq!(w.step_value(), "80 kg");
        let w = Wizard { stage: Stage::DataEntry(StepId::DietPreferences), draft }
            .toggle_diet_preference(DietPreference::LowCarb);
        assert_eq!(w.step_value(), "Vegan, Low-Carb");
        let w = Wizard { stage: Stage::DataEntry(StepId::Equipment), draft: alex_draft() };
        assert_eq!(w.step_value(), "None (bodyweight only)");
    }

    #[test]
    fn writes_never_fail_and_toggle_is_involutive() {
        let w = Wizard::new()
            .update_field(FieldUpdate::CurrentWeight("heavy".into()))
            .update_field(FieldUpdate::WeightUnit(WeightUnit::Lbs))
            .update_field(FieldUpdate::TrainingMethod(TrainingMethod::Yoga));
        assert_eq!(w.draft().current_weight, "heavy");
        assert_eq!(w.draft().training_method, Some(TrainingMethod::Yoga));

        let before = w.draft().clone();
        let w = w
            .toggle_diet_preference(DietPreference::Pescatarian)
            .toggle_diet_preference(DietPreference::Pescatarian);
        assert_eq!(w.draft(), &before);
    }

    #[test]
    fn later_steps_are_always_valid() {
        let w = Wizard { stage: Stage::FinalConfirm, draft: ProfileDraft::default() };
        assert!(w.is_current_step_valid());
        assert_eq!(w.progress(), None);
        let w = Wizard { stage: Stage::Generating, draft: ProfileDraft::default() };
        assert!(w.is_current_step_valid());
    }

    #[tokio::test]
    async fn confirming_review_enters_generating_before_plan() {
        let w = at_final_confirm().confirm_yes();
        assert_eq!(w.stage(), &Stage::Generating);
        assert_eq!(w.step_index(), 9);
        assert!(w.plan().is_none());

        let provider = make_provider(0);
        let w = w.generate_plan(provider.as_ref()).await;
        assert_eq!(w.step_index(), 10);
        assert!(w.is_current_step_valid());
        let plan = w.plan().expect("plan stored");
        assert_eq!(plan.days[0].nutrition.meals[0].name, "Greek Yogurt Parfait");
        assert_eq!(w.clone().go_back(), w);
    }

    #[tokio::test]
    async fn failure_parks_at_generating_and_can_retry() {
        let w = at_final_confirm().confirm_yes();
        let w = w.generate_plan(&FailingProvider).await;
        assert_eq!(w.step_index(), 9);
        assert!(w.plan().is_none());
        assert!(w.failure().unwrap().contains("upstream unavailable"));

        let provider = make_provider(0);
        let w = w.generate_plan(provider.as_ref()).await;
        assert!(w.plan().is_some());
        assert!(w.failure().is_none());
    }

    #[tokio::test]
    async fn failure_can_step_back_to_review() {
        let w = at_final_confirm().confirm_yes().generate_plan(&FailingProvider).await;
        let w = w.go_back();
        assert_eq!(w.stage(), &Stage::FinalConfirm);
        assert_eq!(w.confirm_yes().stage(), &Stage::Generating);
    }

    #[tokio::test]
    async fn incomplete_profile_fails_generation() {
        let w = at_final_confirm()
            .update_field(FieldUpdate::Email("nope".into()))
            .confirm_yes();
        let provider = make_provider(0);
        let w = w.generate_plan(provider.as_ref()).await;
        assert!(w.failure().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn generate_outside_generation_is_ignored() {
        let provider = make_provider(0);
        for w in [Wizard::with_draft(alex_draft()), at_final_confirm()] {
            let after = w.clone().generate_plan(provider.as_ref()).await;
            assert_eq!(after, w);
        }
    }

    #[tokio::test]
    async fn regenerating_after_done_replaces_the_plan() {
        let provider = make_provider(0);
        let w = at_final_confirm().confirm_yes().generate_plan(provider.as_ref()).await;
        assert!(w.plan().unwrap().is_weight_loss);

        let w = w
            .update_field(FieldUpdate::GoalWeight("95".into()))
            .generate_plan(provider.as_ref())
            .await;
        assert_eq!(w.step_index(), 10);
        let plan = w.plan().expect("plan replaced");
        assert!(!plan.is_weight_loss);
        assert_eq!(plan.days[0].workout.conditioning, crate::plan::catalog::INTERVALS);
    }
}
