//! Host runtime
//!
//! Plays the home-automation host for the binary: owns the registered
//! lights, triggers a refresh of every light on a fixed interval and runs
//! console commands. Every light gets its own command queue drained by one
//! worker task: commands for a light run in the order they were received,
//! and a slow bulb never stalls the others.

use crate::application::platform::{DeviceRegistry, Light};
use crate::domain::models::TurnOnOptions;
use crate::presentation::console;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    TurnOn { name: String, options: TurnOnOptions },
    TurnOff { name: String },
    Status { name: Option<String> },
    Quit,
}

/// Command queued for a single light's worker
#[derive(Debug, Clone, Copy)]
enum DeviceCommand {
    TurnOn(TurnOnOptions),
    TurnOff,
}

type DeviceQueues = HashMap<String, mpsc::UnboundedSender<DeviceCommand>>;

pub struct Host {
    devices: Vec<Arc<dyn Light>>,
    poll_interval: Duration,
}

impl DeviceRegistry for Host {
    fn add_devices(&mut self, devices: Vec<Arc<dyn Light>>) {
        for device in devices {
            info!("Registered {}", device);
            self.devices.push(device);
        }
    }
}

impl Host {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            devices: Vec::new(),
            poll_interval,
        }
    }

    pub fn devices(&self) -> &[Arc<dyn Light>] {
        &self.devices
    }

    pub fn device(&self, name: &str) -> Option<&Arc<dyn Light>> {
        self.devices.iter().find(|d| d.name() == name)
    }

    /// Run until `Quit` arrives or every sender is gone, then disconnect
    pub async fn run(self, mut commands: mpsc::UnboundedReceiver<HostCommand>) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut queues = DeviceQueues::new();
        let mut workers = JoinSet::new();

        info!(
            "Host started with {} device(s), polling every {:?}",
            self.devices.len(),
            self.poll_interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.poll_all(),
                command = commands.recv() => match command {
                    None | Some(HostCommand::Quit) => break,
                    Some(command) => self.dispatch(command, &mut queues, &mut workers),
                },
            }
        }

        // Closing the queues lets each worker finish what is already queued
        drop(queues);
        while let Some(result) = workers.join_next().await {
            if let Err(e) = result {
                warn!("Device worker failed: {}", e);
            }
        }
        self.shutdown().await;
    }

    fn poll_all(&self) {
        debug!("Polling {} device(s)", self.devices.len());
        for device in &self.devices {
            device.clone().update();
        }
    }

    fn dispatch(
        &self,
        command: HostCommand,
        queues: &mut DeviceQueues,
        workers: &mut JoinSet<()>,
    ) {
        match command {
            HostCommand::TurnOn { name, options } => {
                self.enqueue(&name, DeviceCommand::TurnOn(options), queues, workers)
            }
            HostCommand::TurnOff { name } => {
                self.enqueue(&name, DeviceCommand::TurnOff, queues, workers)
            }
            HostCommand::Status { name: Some(name) } => {
                if let Some(device) = self.lookup(&name) {
                    println!("{}", console::render_status(device.as_ref()));
                }
            }
            HostCommand::Status { name: None } => {
                for device in &self.devices {
                    println!("{}", console::render_status(device.as_ref()));
                }
            }
            HostCommand::Quit => {}
        }
    }

    /// Append `command` to the light's queue, starting its worker on first use
    fn enqueue(
        &self,
        name: &str,
        command: DeviceCommand,
        queues: &mut DeviceQueues,
        workers: &mut JoinSet<()>,
    ) {
        let Some(device) = self.lookup(name) else {
            return;
        };

        let command = match queues.get(name) {
            Some(queue) => match queue.send(command) {
                Ok(()) => return,
                Err(mpsc::error::SendError(command)) => {
                    warn!("Worker for {} stopped, restarting", device);
                    command
                }
            },
            None => command,
        };

        let (tx, rx) = mpsc::unbounded_channel();
        // `rx` is still held here, so this send cannot fail
        let _ = tx.send(command);
        workers.spawn(drain_queue(device, rx));
        queues.insert(name.to_string(), tx);
    }

    fn lookup(&self, name: &str) -> Option<Arc<dyn Light>> {
        let device = self.device(name).cloned();
        if device.is_none() {
            warn!("Unknown device '{}'", name);
        }
        device
    }

    async fn shutdown(&self) {
        info!("Shutting down, disconnecting {} device(s)", self.devices.len());
        for device in &self.devices {
            device.shutdown().await;
        }
    }
}

/// Run one light's commands in arrival order until its queue is closed
async fn drain_queue(
    device: Arc<dyn Light>,
    mut queue: mpsc::UnboundedReceiver<DeviceCommand>,
) {
    while let Some(command) = queue.recv().await {
        debug!(device = %device, ?command, "running command");
        match command {
            DeviceCommand::TurnOn(options) => device.turn_on(options).await,
            DeviceCommand::TurnOff => device.turn_off().await,
        }
    }
}
