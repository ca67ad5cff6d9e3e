use std::io::Write;

use crate::control::simulation::SimulationRun;

/// Time-indexed record of one completed run. All four columns have the same
/// length and index `i` is time `i * 0.1` s.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    time: Vec<f64>,
    acceleration: Vec<f64>,
    velocity: Vec<f64>,
    altitude: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub time: f64,         // s
    pub acceleration: f64, // m/s²
    pub velocity: f64,     // m/s
    pub altitude: f64,     // m
}

impl SimulationTrace {
    pub(crate) fn new(
        time: Vec<f64>,
        acceleration: Vec<f64>,
        velocity: Vec<f64>,
        altitude: Vec<f64>,
    ) -> Self {
        debug_assert!(
            time.len() == acceleration.len()
                && time.len() == velocity.len()
                && time.len() == altitude.len(),
            "Trace columns must be aligned"
        );
        SimulationTrace {
            time,
            acceleration,
            velocity,
            altitude,
        }
    }

    pub fn from_samples(samples: &[TraceSample]) -> Self {
        SimulationTrace {
            time: samples.iter().map(|s| s.time).collect(),
            acceleration: samples.iter().map(|s| s.acceleration).collect(),
            velocity: samples.iter().map(|s| s.velocity).collect(),
            altitude: samples.iter().map(|s| s.altitude).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<TraceSample> {
        if index >= self.len() {
            return None;
        }
        Some(TraceSample {
            time: self.time[index],
            acceleration: self.acceleration[index],
            velocity: self.velocity[index],
            altitude: self.altitude[index],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = TraceSample> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn altitude(&self) -> &[f64] {
        &self.altitude
    }

    pub fn last(&self) -> Option<TraceSample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    pub fn table_rows(&self, stride: TableStride) -> impl Iterator<Item = TraceSample> + '_ {
        self.samples().step_by(stride.steps())
    }

    pub fn write_table<W: Write>(&self, writer: &mut W, stride: TableStride) -> std::io::Result<()> {
        writeln!(writer, "t\ta\tv\th")?;
        for row in self.table_rows(stride) {
            writeln!(
                writer,
                "{:2.1}\t{:6.3}\t{:6.2}\t{:6.2}",
                row.time, row.acceleration, row.velocity, row.altitude
            )?;
        }
        Ok(())
    }

    pub fn values(&self, series: TraceSeries) -> &[f64] {
        match series {
            TraceSeries::Altitude => &self.altitude,
            TraceSeries::Velocity => &self.velocity,
            TraceSeries::Acceleration => &self.acceleration,
        }
    }

    /// `(time, value)` pairs for plotting one quantity against time.
    pub fn series(&self, series: TraceSeries) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.values(series).iter().copied())
    }

    /// Plot extents. Both axes always include zero.
    pub fn series_bounds(&self, series: TraceSeries) -> SeriesBounds {
        let (time_min, time_max) = extent(&self.time);
        let (value_min, value_max) = extent(self.values(series));
        SeriesBounds {
            time_min,
            time_max,
            value_min,
            value_max,
        }
    }
}

fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Table resolution offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStride {
    Tenth, // 0.1 s
    Half,  // 0.5 s
    Whole, // 1 s
}

impl TableStride {
    pub fn steps(&self) -> usize {
        match self {
            TableStride::Tenth => 1,
            TableStride::Half => 5,
            TableStride::Whole => 10,
        }
    }

    pub fn from_steps(steps: usize) -> Option<Self> {
        match steps {
            1 => Some(TableStride::Tenth),
            5 => Some(TableStride::Half),
            10 => Some(TableStride::Whole),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSeries {
    Altitude,
    Velocity,
    Acceleration,
}

impl TraceSeries {
    pub fn label(&self) -> &'static str {
        match self {
            TraceSeries::Altitude => "Displacement",
            TraceSeries::Velocity => "Velocity",
            TraceSeries::Acceleration => "Acceleration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesBounds {
    pub time_min: f64,
    pub time_max: f64,
    pub value_min: f64,
    pub value_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub max_velocity: f64,
    pub max_altitude: f64,
    pub max_acceleration: f64,
    pub final_sample: Option<TraceSample>,
    pub srb_separation_step: Option<usize>,
    pub booster_burnout_step: Option<usize>,
    pub srb_burnout_step: Option<usize>,
}

impl FlightSummary {
    pub fn from_run(run: &SimulationRun) -> Self {
        let trace = &run.trace;
        FlightSummary {
            max_velocity: peak(trace.velocity()),
            max_altitude: peak(trace.altitude()),
            max_acceleration: peak(trace.acceleration()),
            final_sample: trace.last(),
            srb_separation_step: run.events.srb_separation_step,
            booster_burnout_step: run.events.booster_burnout_step,
            srb_burnout_step: run.events.srb_burnout_step,
        }
    }

    pub fn display_data(&self) {
        println!("\n--- Simulation Summary ---");
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Altitude: {}", format_altitude(self.max_altitude));
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        if let Some(last) = self.final_sample {
            println!(
                "Final State: t={} | Alt: {} | Vel: {:.2} m/s",
                format_time(last.time),
                format_altitude(last.altitude),
                last.velocity
            );
        }

        println!("\n--- Propulsion Events ---");
        let events = [
            ("SRB burnout", self.srb_burnout_step),
            ("SRB separation", self.srb_separation_step),
            ("Atlas booster burnout", self.booster_burnout_step),
        ];
        for (name, step) in events {
            match step {
                Some(step) => println!("{} at: {}", name, format_time(step as f64 / 10.0)),
                None => println!("{}: not reached", name),
            }
        }
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::MIN, f64::max)
}

pub fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.1}s", minutes, seconds)
    } else {
        format!("{:.1}s", elapsed_time)
    }
}

pub fn format_altitude(altitude: f64) -> String {
    if altitude >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.2} m", altitude)
    }
}
