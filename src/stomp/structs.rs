pub mod stomp_frame;
