use std::sync::Arc;

use aries_exchange::{
    connection::ConnectionLookup,
    protocols::{
        exchange::{ExchangeKind, ExchangeService},
        kinds::{QuestionAnswerKind, QuestionnaireKind, SubmissionKind, SurveyKind},
    },
    transport::OutboundDispatch,
};
use tokio::sync::{mpsc, Mutex};

use crate::{
    agent::{agent_config::AgentConfig, agent_struct::Agent},
    error::AgentResult,
    handlers::{connection::ServiceConnections, exchange::ServiceExchange},
    transport::in_memory::InMemoryTransport,
};

fn build_exchange<K: ExchangeKind>(
    config: &AgentConfig,
    connections: &Arc<ServiceConnections>,
    transport: &Arc<InMemoryTransport>,
) -> Arc<ServiceExchange<K>> {
    let enabled = config.is_enabled(K::PROTOCOL);
    if enabled {
        warn!(
            "Protocol {} is experimental and may change without notice",
            K::PROTOCOL.as_ref()
        );
    }
    let connections: Arc<dyn ConnectionLookup> = connections.clone();
    let dispatch: Arc<dyn OutboundDispatch> = transport.clone();
    Arc::new(ServiceExchange::new(
        ExchangeService::in_memory(config.event_channel_capacity),
        connections,
        dispatch,
        enabled,
    ))
}

impl Agent {
    pub fn initialize(config: AgentConfig) -> AgentResult<Self> {
        config.validate()?;
        info!("Initializing agent {}", config.label);

        let connections = Arc::new(ServiceConnections::new());
        let transport = Arc::new(InMemoryTransport::new());
        let (inbox_sender, inbox) = mpsc::unbounded_channel();

        let question_answer =
            build_exchange::<QuestionAnswerKind>(&config, &connections, &transport);
        let questionnaire = build_exchange::<QuestionnaireKind>(&config, &connections, &transport);
        let submission = build_exchange::<SubmissionKind>(&config, &connections, &transport);
        let survey = build_exchange::<SurveyKind>(&config, &connections, &transport);

        Ok(Self {
            config,
            connections,
            transport,
            inbox_sender,
            inbox: Arc::new(Mutex::new(inbox)),
            question_answer,
            questionnaire,
            submission,
            survey,
        })
    }
}
