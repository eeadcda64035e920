pub mod question_answer;
pub mod questionnaire;
pub mod submission;
pub mod survey;

pub use self::{
    question_answer::QuestionAnswerKind, questionnaire::QuestionnaireKind,
    submission::SubmissionKind, survey::SurveyKind,
};
