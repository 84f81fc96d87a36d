//! Staged reveal of a generated name.
//!
//! The model answers in one piece, but the product shows the answer as if it
//! were being composed: three step labels while the request is in flight,
//! then one field at a time. Everything here is presentation timing; none of
//! it reflects real generation progress.
//!
//! ```text
//! Idle ─► Submitting ─► Analyzing ─► Matching ─► Harmonizing ─┐
//!              │             │           │            │        │ (joined with
//!              └─────────────┴───────────┴────────────┴─► Failed  the request)
//!                                                              ▼
//!                           Done ◄─ Revealing(Alternatives) ◄─ … ◄─ Revealing(Skeleton)
//! ```
//!
//! The step labels run on minimum display durations concurrently with the
//! one network call, and the reveal starts once both are finished. A failed
//! call short-circuits straight to `Failed`.
//!
//! Each submission gets a fresh request id stored in the published
//! [`GenerationView`]. Every write checks that id first, so a superseded run
//! (new submission, or [`RevealController::abandon`]) can never overwrite the
//! state of a newer one; it notices on its next write and ends as
//! [`RevealOutcome::Abandoned`].
use std::time::Duration;

use futures_util::future::try_join;
use hanming_core::{
    error::{HanmingError, Result},
    generic::GenericMessage,
    provider::ChatCompletionProvider,
};
use hanming_types::{locale::Language, name::GeneratedName, request::GenerationRequest};
use tokio::{
    sync::watch,
    time::{Instant, sleep, sleep_until},
};

use crate::NameGenerator;

/// Minimum display durations of the cosmetic phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    pub analyzing: Duration,
    pub matching: Duration,
    pub harmonizing: Duration,
    /// Gap between consecutive reveal stages, measured from a common start.
    pub field_interval: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            analyzing: Duration::from_millis(300),
            matching: Duration::from_millis(200),
            harmonizing: Duration::from_millis(200),
            field_interval: Duration::from_millis(100),
        }
    }
}

/// One frame of the reveal. Stages are ordered; each adds one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealStage {
    /// Only the source name is known.
    Skeleton,
    Characters,
    Romanization,
    OverallMeaning,
    CharacterBreakdown,
    CulturalNote,
    SuggestedUses,
    Alternatives,
}

impl RevealStage {
    pub const ORDER: [RevealStage; 8] = [
        RevealStage::Skeleton,
        RevealStage::Characters,
        RevealStage::Romanization,
        RevealStage::OverallMeaning,
        RevealStage::CharacterBreakdown,
        RevealStage::CulturalNote,
        RevealStage::SuggestedUses,
        RevealStage::Alternatives,
    ];

    /// Copy this stage's field from `full` into `shown`, leaving every other
    /// field untouched.
    pub fn apply(self, full: &GeneratedName, shown: &mut GeneratedName) {
        match self {
            RevealStage::Skeleton => shown.source_name.clone_from(&full.source_name),
            RevealStage::Characters => shown.characters.clone_from(&full.characters),
            RevealStage::Romanization => shown.romanization.clone_from(&full.romanization),
            RevealStage::OverallMeaning => shown.overall_meaning.clone_from(&full.overall_meaning),
            RevealStage::CharacterBreakdown => {
                shown
                    .character_breakdown
                    .clone_from(&full.character_breakdown)
            }
            RevealStage::CulturalNote => shown.cultural_note.clone_from(&full.cultural_note),
            RevealStage::SuggestedUses => shown.suggested_uses.clone_from(&full.suggested_uses),
            RevealStage::Alternatives => shown.alternatives.clone_from(&full.alternatives),
        }
    }

    /// What the user sees once every stage up to and including `self` ran.
    pub fn revealed(self, full: &GeneratedName) -> GeneratedName {
        let mut shown = full.skeleton();
        for stage in RevealStage::ORDER.into_iter().take_while(|s| *s <= self) {
            stage.apply(full, &mut shown);
        }
        shown
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Submitting,
    Analyzing,
    Matching,
    Harmonizing,
    Revealing(RevealStage),
    Done,
    Failed,
}

impl GenerationPhase {
    /// Progress label shown on the submit button, if any.
    pub fn label(self, language: Language) -> Option<&'static str> {
        let messages = language.messages();
        match self {
            GenerationPhase::Submitting | GenerationPhase::Revealing(_) => {
                Some(messages.generating)
            }
            GenerationPhase::Analyzing => Some(messages.step_analyzing),
            GenerationPhase::Matching => Some(messages.step_matching),
            GenerationPhase::Harmonizing => Some(messages.step_harmonizing),
            GenerationPhase::Idle | GenerationPhase::Done | GenerationPhase::Failed => None,
        }
    }

    /// While busy, the form should not accept another submission.
    pub fn is_busy(self) -> bool {
        !matches!(
            self,
            GenerationPhase::Idle | GenerationPhase::Done | GenerationPhase::Failed
        )
    }
}

/// Snapshot published to observers after every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationView {
    /// Id of the submission this snapshot belongs to. Strictly increasing.
    pub request_id: u64,
    pub phase: GenerationPhase,
    /// The partially revealed name; `None` before the reveal and after a failure.
    pub displayed: Option<GeneratedName>,
    /// Localized, user-facing error text.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every field was shown; carries the full result.
    Revealed(GeneratedName),
    /// A newer submission or [`RevealController::abandon`] superseded this run.
    Abandoned,
}

/// Drives a [`NameGenerator`] through the staged reveal and publishes each
/// step on a [`watch`] channel.
pub struct RevealController<B> {
    generator: NameGenerator<B>,
    timings: RevealTimings,
    language: Language,
    state: watch::Sender<GenerationView>,
}

impl<B> RevealController<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(generator: NameGenerator<B>) -> Self {
        let (state, _) = watch::channel(GenerationView::default());
        Self {
            generator,
            timings: RevealTimings::default(),
            language: Language::default(),
            state,
        }
    }

    pub fn with_timings(mut self, timings: RevealTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn generator(&self) -> &NameGenerator<B> {
        &self.generator
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Receive every published [`GenerationView`].
    pub fn subscribe(&self) -> watch::Receiver<GenerationView> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn view(&self) -> GenerationView {
        self.state.borrow().clone()
    }

    /// Navigate away: supersede whatever is in flight and return to `Idle`.
    pub fn abandon(&self) {
        self.state.send_modify(|view| {
            *view = GenerationView {
                request_id: view.request_id + 1,
                ..GenerationView::default()
            };
        });
    }

    /// Run one submission end to end.
    ///
    /// # Errors
    ///
    /// * [`HanmingError::Validation`] for a blank name. The inline error is
    ///   published unless another run is in flight; the phase, the request id
    ///   and the backend are untouched either way.
    /// * Any generation error. The view ends in [`GenerationPhase::Failed`]
    ///   with nothing displayed.
    ///
    /// A superseded run returns `Ok(RevealOutcome::Abandoned)` instead of its
    /// own result or error.
    pub async fn generate(&self, request: GenerationRequest) -> Result<RevealOutcome> {
        let request = match request.validated() {
            Ok(request) => request,
            Err(err) => {
                // A run in flight owns the view; its reveal must not carry the banner.
                let message = self.language.error_message(&err).to_owned();
                self.state.send_if_modified(|view| {
                    if view.phase.is_busy() {
                        return false;
                    }
                    view.error = Some(message);
                    true
                });
                return Err(err);
            }
        };

        let id = self.begin();
        self.publish(id, |view| view.phase = GenerationPhase::Analyzing);

        let steps = async {
            self.step_labels(id).await;
            Ok::<_, HanmingError>(())
        };
        let name = match try_join(self.generator.generate(&request), steps).await {
            Ok((name, ())) => name,
            Err(err) => {
                let message = self.language.error_message(&err).to_owned();
                let failed = self.publish(id, |view| {
                    view.phase = GenerationPhase::Failed;
                    view.displayed = None;
                    view.error = Some(message);
                });
                return if failed {
                    Err(err)
                } else {
                    Ok(RevealOutcome::Abandoned)
                };
            }
        };

        let start = Instant::now();
        for (offset, stage) in (0u32..).zip(RevealStage::ORDER) {
            sleep_until(start + self.timings.field_interval * offset).await;

            let shown = self.publish(id, |view| {
                view.phase = GenerationPhase::Revealing(stage);
                let displayed = view.displayed.get_or_insert_with(|| name.skeleton());
                stage.apply(&name, displayed);
            });
            if !shown {
                tracing::debug!(request_id = id, ?stage, "reveal superseded");
                return Ok(RevealOutcome::Abandoned);
            }
        }

        if !self.publish(id, |view| view.phase = GenerationPhase::Done) {
            return Ok(RevealOutcome::Abandoned);
        }
        Ok(RevealOutcome::Revealed(name))
    }

    /// Allocate the next request id and reset the view for it.
    fn begin(&self) -> u64 {
        let mut id = 0;
        self.state.send_modify(|view| {
            id = view.request_id + 1;
            *view = GenerationView {
                request_id: id,
                phase: GenerationPhase::Submitting,
                displayed: None,
                error: None,
            };
        });
        id
    }

    async fn step_labels(&self, id: u64) {
        sleep(self.timings.analyzing).await;
        if !self.publish(id, |view| view.phase = GenerationPhase::Matching) {
            return;
        }
        sleep(self.timings.matching).await;
        if !self.publish(id, |view| view.phase = GenerationPhase::Harmonizing) {
            return;
        }
        sleep(self.timings.harmonizing).await;
    }

    /// Apply `update` only if `id` is still the current request. Returns
    /// whether it was applied.
    fn publish(&self, id: u64, update: impl FnOnce(&mut GenerationView)) -> bool {
        self.state.send_if_modified(|view| {
            if view.request_id != id {
                return false;
            }
            update(view);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanming_types::name::{AlternativeName, CharacterMeaning};

    fn full() -> GeneratedName {
        GeneratedName {
            characters: "雷明".into(),
            romanization: "Léi Míng".into(),
            source_name: "Raymond".into(),
            overall_meaning: "Thunder and brightness".into(),
            character_breakdown: vec![CharacterMeaning {
                character: "雷".into(),
                romanization: "Léi".into(),
                meaning: "Thunder".into(),
            }],
            cultural_note: "Strong and clear.".into(),
            suggested_uses: vec!["Business".into()],
            alternatives: vec![AlternativeName {
                characters: "瑞明".into(),
                romanization: "Ruì Míng".into(),
                meaning: "Auspicious brightness".into(),
            }],
        }
    }

    #[test]
    fn stages_reveal_fields_in_fixed_order() {
        let full = full();

        let skeleton = RevealStage::Skeleton.revealed(&full);
        assert_eq!(skeleton, full.skeleton());

        let partial = RevealStage::OverallMeaning.revealed(&full);
        assert_eq!(partial.characters, "雷明");
        assert_eq!(partial.romanization, "Léi Míng");
        assert_eq!(partial.overall_meaning, "Thunder and brightness");
        assert!(partial.character_breakdown.is_empty());
        assert!(partial.cultural_note.is_empty());
        assert!(partial.suggested_uses.is_empty());
        assert!(partial.alternatives.is_empty());

        assert_eq!(RevealStage::Alternatives.revealed(&full), full);
    }

    #[test]
    fn apply_keeps_previously_revealed_fields() {
        let full = full();
        let mut shown = RevealStage::Romanization.revealed(&full);
        RevealStage::OverallMeaning.apply(&full, &mut shown);
        assert_eq!(shown.characters, "雷明");
        assert_eq!(shown.overall_meaning, "Thunder and brightness");
    }

    #[test]
    fn step_labels_follow_language() {
        assert_eq!(
            GenerationPhase::Analyzing.label(Language::En),
            Some("Analyzing your name...")
        );
        assert_eq!(
            GenerationPhase::Harmonizing.label(Language::Zh),
            Some("正在添加文化内涵...")
        );
        assert_eq!(GenerationPhase::Done.label(Language::En), None);
        assert!(GenerationPhase::Revealing(RevealStage::Characters).is_busy());
        assert!(!GenerationPhase::Failed.is_busy());
    }
}
