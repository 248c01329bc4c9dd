//! Heartbeat firmware entry point
//!
//! Initializes the RP2350 and spawns the heartbeat task.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use heartbeat_firmware::{
    platform::{DefmtSink, TimerDelay},
    system::config::HeartbeatConfig,
    task::heartbeat::Heartbeat,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Heartbeat task, never returns
#[embassy_executor::task]
async fn heartbeat() {
    Heartbeat::new(HeartbeatConfig::DEFAULT, DefmtSink, TimerDelay)
        .run()
        .await
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // peripherals stay unused, init only brings up clocks and the time driver
    let _p = embassy_rp::init(Config::default());

    spawner.spawn(heartbeat()).unwrap();
}
