pub mod common;
pub mod question_answer;
pub mod questionnaire;
pub mod submission;
pub mod survey;
