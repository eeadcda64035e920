#![allow(dead_code)]

use aries_exchange_agent::{Agent, AgentConfig};
use messages::msg_types::{Protocol, ProtocolName};

pub struct TestAgents {
    pub alice: Agent,
    pub bob: Agent,
    /// Alice's side of the connection to Bob.
    pub alice_to_bob: String,
    /// Bob's side of the connection to Alice.
    pub bob_to_alice: String,
}

pub async fn setup_agents() -> TestAgents {
    setup_agents_with(AgentConfig::builder().label("bob").build()).await
}

pub async fn setup_agents_with(bob_config: AgentConfig) -> TestAgents {
    let alice = Agent::initialize(AgentConfig::builder().label("alice").build()).unwrap();
    let bob = Agent::initialize(bob_config).unwrap();
    let (alice_to_bob, bob_to_alice) = alice.connect_in_process(&bob).await.unwrap();
    TestAgents {
        alice,
        bob,
        alice_to_bob,
        bob_to_alice,
    }
}

pub fn only_protocol(label: &str, name: ProtocolName) -> AgentConfig {
    AgentConfig::builder()
        .label(label)
        .enabled_protocols(vec![Protocol::new(name)])
        .build()
}

/// Processes the next inbox message of `agent`, which must exist and succeed.
pub async fn deliver(agent: &Agent) -> String {
    agent
        .receive_next()
        .await
        .expect("a message in the inbox")
        .unwrap()
}
