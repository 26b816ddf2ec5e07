// ============================================================
// Layer 2 — ImproveUseCase
// ============================================================
// Answers one improvement request:
//
//   Step 1: Parse the request JSON       (raw text from Layer 1)
//   Step 2: Build a Problem              (Layer 3 - domain)
//   Step 3: Synthesize distractors       (Layer 5 - engine)
//   Step 4: Shuffle with the correct
//           answer and find its key
//
// Every path ends in a well-formed ImproveResponse. A request
// that cannot be improved gets its own choices and key back
// with success = false.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::application::rng_from_seed;
use crate::domain::problem::Problem;
use crate::domain::question::{ImproveRequest, ImproveResponse};
use crate::domain::traits::ChoiceImprover;
use crate::engine::synthesizer::Synthesizer;
use crate::engine::units::UnitStrategy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImproveConfig {
    /// Request file; stdin when None
    pub input:         Option<String>,
    pub unit_strategy: UnitStrategy,
    pub seed:          Option<u64>,
}

pub struct ImproveUseCase {
    synthesizer: Synthesizer,
    rng:         StdRng,
}

impl ImproveUseCase {
    pub fn new(config: &ImproveConfig) -> Self {
        Self {
            synthesizer: Synthesizer::new(config.unit_strategy),
            rng:         rng_from_seed(config.seed),
        }
    }

    /// Handle a raw JSON request, as read from stdin or a file.
    pub fn respond(&mut self, raw: &str) -> ImproveResponse {
        let raw = raw.trim();
        if raw.is_empty() {
            return ImproveResponse::failed("No input data received");
        }
        tracing::debug!("Received input: {raw}");

        match serde_json::from_str::<ImproveRequest>(raw) {
            Ok(request) => self.improve(&request),
            Err(e)      => ImproveResponse::failed(e.to_string()),
        }
    }
}

impl ChoiceImprover for ImproveUseCase {
    fn improve(&mut self, request: &ImproveRequest) -> ImproveResponse {
        let problem = Problem::new(&request.question_text, request.grade, &request.correct_answer);

        match self.synthesizer.synthesize(&problem, &mut self.rng) {
            Ok(set) => {
                let shuffled = set.into_choices(&mut self.rng);
                ImproveResponse::improved(shuffled.choices, shuffled.answer_key)
            }
            Err(e) => {
                tracing::warn!("Could not improve distractors: {e}");
                let key = request.answer_key.clone().unwrap_or_else(|| "A".to_string());
                ImproveResponse::kept_original(request.choices.clone(), key)
            }
        }
    }
}
