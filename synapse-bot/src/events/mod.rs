pub mod llm_events;
