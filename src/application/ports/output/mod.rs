pub mod fire_event_port;
