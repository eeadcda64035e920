use std::sync::Arc;

use aries_exchange::{
    connection::ConnectionState,
    protocols::kinds::{QuestionAnswerKind, QuestionnaireKind, SubmissionKind, SurveyKind},
};
use messages::msg_types::Role;
use serde::Serialize;
use tokio::sync::{
    mpsc::{UnboundedReceiver, UnboundedSender},
    Mutex,
};

use crate::{
    agent::agent_config::AgentConfig,
    error::AgentResult,
    handlers::{connection::ServiceConnections, exchange::ServiceExchange},
    transport::in_memory::{InMemoryTransport, InboundWire},
};

/// A protocol this agent speaks, as advertised to peers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProtocolDescriptor {
    pub pid: String,
    pub roles: Vec<Role>,
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub(crate) config: AgentConfig,
    pub(crate) connections: Arc<ServiceConnections>,
    pub(crate) transport: Arc<InMemoryTransport>,
    pub(crate) inbox_sender: UnboundedSender<InboundWire>,
    pub(crate) inbox: Arc<Mutex<UnboundedReceiver<InboundWire>>>,
    pub(crate) question_answer: Arc<ServiceExchange<QuestionAnswerKind>>,
    pub(crate) questionnaire: Arc<ServiceExchange<QuestionnaireKind>>,
    pub(crate) submission: Arc<ServiceExchange<SubmissionKind>>,
    pub(crate) survey: Arc<ServiceExchange<SurveyKind>>,
}

impl Agent {
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn connections(&self) -> Arc<ServiceConnections> {
        self.connections.clone()
    }

    pub fn transport(&self) -> Arc<InMemoryTransport> {
        self.transport.clone()
    }

    pub fn question_answer(&self) -> Arc<ServiceExchange<QuestionAnswerKind>> {
        self.question_answer.clone()
    }

    pub fn questionnaire(&self) -> Arc<ServiceExchange<QuestionnaireKind>> {
        self.questionnaire.clone()
    }

    pub fn submission(&self) -> Arc<ServiceExchange<SubmissionKind>> {
        self.submission.clone()
    }

    pub fn survey(&self) -> Arc<ServiceExchange<SurveyKind>> {
        self.survey.clone()
    }

    pub fn supported_protocols(&self) -> Vec<ProtocolDescriptor> {
        self.config
            .enabled_protocols
            .iter()
            .map(|protocol| ProtocolDescriptor {
                pid: protocol.to_string(),
                roles: protocol.roles(),
            })
            .collect()
    }

    /// Establishes a completed connection between this agent and `peer`, routed over the
    /// in-process transport. Returns the connection ids on this side and on the peer's.
    pub async fn connect_in_process(&self, peer: &Agent) -> AgentResult<(String, String)> {
        let ours = self
            .connections
            .create_connection(peer.label(), ConnectionState::Completed)
            .await?;
        let theirs = peer
            .connections
            .create_connection(self.label(), ConnectionState::Completed)
            .await?;

        self.transport
            .add_route(&ours.id, &theirs.id, peer.inbox_sender.clone())?;
        peer.transport
            .add_route(&theirs.id, &ours.id, self.inbox_sender.clone())?;

        info!(
            "Connected {} ({}) with {} ({})",
            self.label(),
            ours.id,
            peer.label(),
            theirs.id
        );
        Ok((ours.id, theirs.id))
    }
}
