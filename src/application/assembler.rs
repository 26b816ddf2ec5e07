// ============================================================
// Layer 2 — Choice Assembler
// ============================================================
// Turns a plain choice list into labelled choices plus an
// answer key:
//
//   Step 1: clean every choice ("B. 7 drops" → "7 drops")
//   Step 2: label them A, B, C, D in order
//   Step 3: find the choice equal to the cleaned correct answer
//   Step 4: no match → overwrite choice A with the correct
//           answer and key it "A"
//
// Step 4 is a normal outcome, not an error: hand-written choices
// may word the answer differently from the record, and the bank
// must still carry the correct answer. Assembly never fails.
//
// Regenerated choices skip Steps 3–4: the synthesizer already
// knows where it placed the correct answer, and its rendering
// ("7 drops") may differ from the record's ("7 Drops"), so a
// text search would miss it and overwrite a distractor.
//
// Callers guarantee at most four choices.

use crate::data::preprocessor::Preprocessor;
use crate::domain::question::{Answer, Choice, CHOICE_LABELS};
use crate::engine::synthesizer::ShuffledChoices;

/// Label `choices` A–D and locate `correct_answer` among them.
pub fn assemble(
    choices:        &[String],
    correct_answer: &str,
    preprocessor:   &Preprocessor,
) -> (Vec<Choice>, Answer) {
    let answer_text = preprocessor.clean_choice(correct_answer);

    let mut labelled = label(choices, preprocessor);

    // The last matching choice carries the key
    let matched = labelled
        .iter()
        .rev()
        .find(|choice| choice.text == answer_text)
        .map(|choice| choice.id.clone());

    let key = match matched {
        Some(key) => key,
        None => {
            tracing::debug!("Correct answer '{}' not among choices; forcing it to A", answer_text);
            match labelled.first_mut() {
                Some(first) => first.text = answer_text.clone(),
                None => labelled.push(Choice {
                    id:   CHOICE_LABELS[0].to_string(),
                    text: answer_text.clone(),
                }),
            }
            CHOICE_LABELS[0].to_string()
        }
    };

    (labelled, Answer { key, text: answer_text })
}

/// Label synthesized choices, trusting the key the synthesizer chose.
pub fn assemble_keyed(
    shuffled:     &ShuffledChoices,
    preprocessor: &Preprocessor,
) -> (Vec<Choice>, Answer) {
    let labelled = label(&shuffled.choices, preprocessor);
    let answer   = Answer {
        key:  shuffled.answer_key.clone(),
        text: preprocessor.clean_choice(&shuffled.correct),
    };
    (labelled, answer)
}

fn label(choices: &[String], preprocessor: &Preprocessor) -> Vec<Choice> {
    choices
        .iter()
        .zip(CHOICE_LABELS)
        .map(|(text, label)| Choice {
            id:   label.to_string(),
            text: preprocessor.clean_choice(text),
        })
        .collect()
}
