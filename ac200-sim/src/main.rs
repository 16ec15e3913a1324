extern crate clap;
use crossbeam_channel::bounded;
use ctrlc;
use env_logger;
use log::{error, info};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ac200_core::bridge::RegIo;
use ac200_core::constants::{rtc, tve};
use ac200_core::device::{Ac200, HostClock};
use ac200_core::error::Error;
use ac200_core::irq::{AcIrq, IrqHandler};
use ac200_sim::{SimClock, SimPort};

/// How often the simulated feature block fires its line
const TRIGGER_PERIOD: Duration = Duration::from_millis(500);

/// Configures command-line interface using clap
fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    let description = "AC200 companion-chip access layer demo on a simulated bus";
    clap::App::new("AC200 simulator")
        .version("0.1")
        .about(description)
        .subcommand(
            clap::SubCommand::with_name("alarm").about("Exercise the RTC alarm 0 virtual line"),
        )
        .subcommand(
            clap::SubCommand::with_name("plug").about("Exercise the TV plug-detect virtual line"),
        )
        .get_matches()
}

/// Sub-device-style subscriber that inspects its block and logs the event.
struct LogHandler {
    line: AcIrq,
}

impl IrqHandler for LogHandler {
    fn service(&mut self, regs: &mut dyn RegIo) -> Result<(), Error> {
        match self.line {
            AcIrq::RtcAlarm0 => {
                let sta = regs.read(rtc::ALARM0_IRQ_STA)?;
                regs.write(rtc::ALARM0_IRQ_STA, 0)?;
                info!("alarm 0 fired (block status 0x{:04X})", sta);
            }
            AcIrq::TvePlugIn => {
                let sta = regs.read(tve::PLUG_STA)?;
                info!("TV cable plugged (plug status 0x{:04X})", sta);
            }
            _ => info!("line {:?} fired", self.line),
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();

    // Set up Ctrl-C handler with channel communication
    let (signal_sender, signal_receiver) = bounded(1);
    let handler_result = ctrlc::set_handler(move || {
        if signal_sender.is_full() {
            std::process::exit(-1);
        }
        let _send_result = signal_sender.send(());
    });

    if let Err(e) = handler_result {
        error!("Signal handler failed: {:?}", e);
        return;
    }

    let cli_matches = get_cli_config();
    let line = match cli_matches.subcommand_name() {
        Some("plug") => AcIrq::TvePlugIn,
        _ => AcIrq::RtcAlarm0,
    };

    let clk = SimClock::new();
    let port = SimPort::new();
    let irq_pin = port.irq_pin();

    let dev = match Ac200::attach(port.clone(), &clk) {
        Ok(dev) => dev,
        Err(e) => {
            error!("attach failed: {:?}", e);
            return;
        }
    };

    let mut handler = LogHandler { line };
    if let Err(e) = dev.subscribe(line, &mut handler) {
        error!("subscribe failed: {:?}", e);
        return;
    }

    // Feature-block thread: fire the line periodically until shutdown
    let running = Arc::new(AtomicBool::new(true));
    let trigger = {
        let port = port.clone();
        let running = running.clone();
        std::thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                std::thread::sleep(TRIGGER_PERIOD);
                port.raise_line(line);
            }
        })
    };

    info!(
        "attached on simulated bus, clock {} Hz, waiting on line {:?}",
        clk.rate_hz(),
        line
    );

    loop {
        if !signal_receiver.is_empty() {
            break;
        }
        match irq_pin.recv_timeout(Duration::from_millis(100)) {
            Ok(()) => {
                if let Err(e) = dev.service_irq() {
                    error!("interrupt cycle failed: {:?}", e);
                    break;
                }
            }
            Err(_) => continue,
        }
    }

    running.store(false, Ordering::SeqCst);
    let _ = trigger.join();

    if let Err(e) = dev.unsubscribe(line) {
        error!("unsubscribe failed: {:?}", e);
    }
    match dev.detach() {
        Ok(port) => info!("detached, {} page selects issued", port.page_selects()),
        Err((_dev, e)) => error!("detach refused: {:?}", e),
    }
}
