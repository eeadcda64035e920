use messages::{
    msg_fields::protocols::{
        question_answer::QuestionAnswer, questionnaire::Questionnaire, submission::Submission,
        survey::Survey,
    },
    AriesMessage,
};
use tokio::sync::mpsc::error::TryRecvError;

use crate::{agent::Agent, error::*, transport::in_memory::InboundWire};

impl Agent {
    /// Routes an inbound message to the exchange it belongs to and returns the id of the
    /// record it created or advanced.
    pub async fn receive_message(
        &self,
        connection_id: &str,
        message: AriesMessage,
    ) -> AgentResult<String> {
        debug!(
            "Agent {} received message {} on connection {}",
            self.label(),
            message.id(),
            connection_id
        );
        let record_id = match message {
            AriesMessage::QuestionAnswer(QuestionAnswer::Question(msg)) => self
                .question_answer
                .process_request(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::QuestionAnswer(QuestionAnswer::Answer(msg)) => self
                .question_answer
                .process_response(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Questionnaire(Questionnaire::Question(msg)) => self
                .questionnaire
                .process_request(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Questionnaire(Questionnaire::Answer(msg)) => self
                .questionnaire
                .process_response(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Submission(Submission::Questionnaire(msg)) => self
                .submission
                .process_request(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Submission(Submission::Submission(msg)) => self
                .submission
                .process_response(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Survey(Survey::Request(msg)) => self
                .survey
                .process_request(connection_id, msg)
                .await?
                .id()
                .to_string(),
            AriesMessage::Survey(Survey::Response(msg)) => self
                .survey
                .process_response(connection_id, msg)
                .await?
                .id()
                .to_string(),
        };
        Ok(record_id)
    }

    /// Parses a serialized message and routes it like [`Agent::receive_message`].
    pub async fn receive_wire(&self, wire: InboundWire) -> AgentResult<String> {
        let message: AriesMessage = serde_json::from_str(&wire.payload)?;
        self.receive_message(&wire.connection_id, message).await
    }

    /// Processes the oldest message waiting in the inbox. Returns `None` when the inbox
    /// is empty.
    pub async fn receive_next(&self) -> Option<AgentResult<String>> {
        let wire = {
            let mut inbox = self.inbox.lock().await;
            match inbox.try_recv() {
                Ok(wire) => wire,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    error!("Inbox of agent {} is disconnected", self.label());
                    return None;
                }
            }
        };
        Some(self.receive_wire(wire).await)
    }
}
