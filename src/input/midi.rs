use super::midi_message_to_event;
use crate::synth::ParamEvent;
use midir::{MidiInput, MidiInputConnection, MidiInputPort};
use std::io::{stdin, stdout, Write};
use std::sync::mpsc::Sender;
use std::sync::mpsc::{self, Receiver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MidiError {
    #[error("no MIDI input ports found")]
    NoPorts,
    #[error("invalid MIDI port selection")]
    InvalidSelection,
    #[error(transparent)]
    Init(#[from] midir::InitError),
    #[error(transparent)]
    PortInfo(#[from] midir::PortInfoError),
    #[error("failed to connect to MIDI port: {0}")]
    Connect(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct MidiHandler {
    /// Holds the connection to keep it alive
    #[allow(dead_code)]
    connection: Option<MidiInputConnection<()>>,
    receiver: Option<Receiver<(u8, u8, u8)>>, // (status, data1, data2)
    param_sender: Sender<ParamEvent>,
}

impl MidiHandler {
    pub fn new(param_sender: Sender<ParamEvent>) -> Self {
        match Self::try_new(param_sender.clone()) {
            Ok(handler) => handler,
            Err(e) => {
                log::warn!(
                    "Failed to initialize MIDI: {}. MIDI control will be disabled.",
                    e
                );
                Self {
                    connection: None,
                    receiver: None,
                    param_sender,
                }
            }
        }
    }

    fn try_new(param_sender: Sender<ParamEvent>) -> Result<Self, MidiError> {
        let midi_in = MidiInput::new("WindSynth Input")?;
        let port = Self::select_input_port(&midi_in)?;
        let port_name = midi_in.port_name(&port)?;

        let (sender, receiver) = mpsc::channel();

        let connection = midi_in
            .connect(
                &port,
                "midir-read-input",
                move |_, message, _| {
                    if message.len() >= 3 {
                        let _ = sender.send((message[0], message[1], message[2]));
                    }
                },
                (),
            )
            .map_err(|e| MidiError::Connect(e.to_string()))?;

        log::info!("Opened MIDI port: {}", port_name);

        Ok(Self {
            connection: Some(connection),
            receiver: Some(receiver),
            param_sender,
        })
    }

    fn select_input_port(midi_in: &MidiInput) -> Result<MidiInputPort, MidiError> {
        let in_ports = midi_in.ports();
        if in_ports.is_empty() {
            return Err(MidiError::NoPorts);
        }

        log::info!("Available MIDI input ports:");
        for (i, port) in in_ports.iter().enumerate() {
            log::info!("{}: {}", i, midi_in.port_name(port)?);
        }

        print!("Select MIDI input port: ");
        stdout().flush()?;
        let mut input = String::new();
        stdin().read_line(&mut input)?;
        let selection = input.trim().parse::<usize>().unwrap_or(0);

        let port = in_ports
            .get(selection)
            .ok_or(MidiError::InvalidSelection)?
            .clone();

        Ok(port)
    }

    pub fn update(&mut self) {
        if let Some(receiver) = &self.receiver {
            while let Ok((status, data1, data2)) = receiver.try_recv() {
                let Some(event) = midi_message_to_event(status, data1, data2) else {
                    continue;
                };
                if let Err(e) = self.param_sender.send(event) {
                    log::error!("Failed to send MIDI parameter event: {}", e);
                }
            }
        }
    }
}
