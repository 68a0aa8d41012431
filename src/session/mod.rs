//! Simulation session owning the bodies launched into one scene.
//!
//! The session is driven by an external loop: one [`SimulationSession::tick`] per frame
//! steps every active body once and records its new position. Regimes are classified
//! once at launch and never re-derived from the live state.

use std::collections::VecDeque;

use kernel_core::tolerance::Tolerances;
use kernel_core::vector::Vector3;
use kernel_dynamics::{Body, ForceModel, Integrator};
use kernel_export::snapshot::{BodyRecord, SessionSnapshot};
use kernel_orbits::{OrbitClassifier, OrbitRegime};
use kernel_trajectory::TrajectoryPath;

use crate::{event, warn};

/// Visual radius given to launched bodies.
pub const DEFAULT_BODY_RADIUS: f64 = 0.15;

/// Playback speed multiplier offered by the scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeScale {
    #[default]
    X1,
    X2,
    X5,
}

impl TimeScale {
    pub fn factor(&self) -> u32 {
        match self {
            TimeScale::X1 => 1,
            TimeScale::X2 => 2,
            TimeScale::X5 => 5,
        }
    }

    pub fn from_factor(factor: u32) -> Option<Self> {
        match factor {
            1 => Some(TimeScale::X1),
            2 => Some(TimeScale::X2),
            5 => Some(TimeScale::X5),
            _ => None,
        }
    }
}

/// Stable handle to a launched body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Initial state of a body about to be launched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub position: Vector3,
    pub velocity: Vector3,
}

/// A launched body with its path and the regime fixed at launch.
#[derive(Debug, Clone)]
pub struct TrackedBody {
    pub id: BodyId,
    pub body: Body,
    pub path: TrajectoryPath,
    pub regime: OrbitRegime,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub dt: f64,
    pub stepped: usize,
    pub crashed: Vec<BodyId>,
    pub evicted_points: usize,
}

/// Bodies, their paths, and the physics they move under.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    force: ForceModel,
    integrator: Integrator,
    classifier: OrbitClassifier,
    base_time_step: f64,
    time_scale: TimeScale,
    max_bodies: usize,
    bodies: VecDeque<TrackedBody>,
    next_id: u64,
    ticks: u64,
}

impl SimulationSession {
    pub fn new(force: ForceModel, base_time_step: f64, max_bodies: usize) -> Self {
        Self {
            force,
            integrator: Integrator::default(),
            classifier: OrbitClassifier::default(),
            base_time_step,
            time_scale: TimeScale::default(),
            max_bodies: max_bodies.max(1),
            bodies: VecDeque::with_capacity(max_bodies.max(1)),
            next_id: 0,
            ticks: 0,
        }
    }

    /// Replace the integrator and classifier tolerances.
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.integrator = Integrator::new(tolerances.collision);
        self.classifier = OrbitClassifier::new(tolerances.circular_band);
        self
    }

    pub fn force(&self) -> &ForceModel {
        &self.force
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, time_scale: TimeScale) {
        self.time_scale = time_scale;
    }

    /// Step handed to the integrator each tick.
    pub fn dt(&self) -> f64 {
        self.base_time_step * f64::from(self.time_scale.factor())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn max_bodies(&self) -> usize {
        self.max_bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|tracked| tracked.body.is_active).count()
    }

    /// Tracked bodies, oldest launch first.
    pub fn bodies(&self) -> impl Iterator<Item = &TrackedBody> {
        self.bodies.iter()
    }

    pub fn get(&self, id: BodyId) -> Option<&TrackedBody> {
        self.bodies.iter().find(|tracked| tracked.id == id)
    }

    /// Regime a launch from `position` with `velocity` falls into.
    ///
    /// Central fields assume the launch velocity is perpendicular to the radius, so only its
    /// magnitude is used; a radial launch is misclassified. Flat-ground arcs always come back
    /// down.
    pub fn classify(&self, launch: &Launch) -> OrbitRegime {
        match self.force.central_mass() {
            Some(mass) => self.classifier.classify(
                launch.velocity.norm(),
                launch.position.norm() - mass.radius,
                mass.gm,
                mass.radius,
            ),
            None => OrbitRegime::Crashed,
        }
    }

    /// Launch a new body, evicting the oldest one when the session is full.
    pub fn launch(&mut self, launch: Launch) -> BodyId {
        while self.bodies.len() >= self.max_bodies {
            if let Some(evicted) = self.bodies.pop_front() {
                event!("evicting body {} to make room", evicted.id.0);
            }
        }

        let regime = self.classify(&launch);
        let id = BodyId(self.next_id);
        self.next_id += 1;

        let mut path = TrajectoryPath::new(regime);
        path.record(launch.position, regime);
        self.bodies.push_back(TrackedBody {
            id,
            body: Body::new(launch.position, launch.velocity, DEFAULT_BODY_RADIUS),
            path,
            regime,
        });
        event!(
            "launched body {} at |r| = {:.4}, |v| = {:.4} ({regime})",
            id.0,
            launch.position.norm(),
            launch.velocity.norm()
        );
        id
    }

    /// Advance every active body by one step and record where it went.
    pub fn tick(&mut self) -> TickReport {
        let dt = self.dt();
        let mut report = TickReport {
            dt,
            ..TickReport::default()
        };

        for tracked in self.bodies.iter_mut().filter(|tracked| tracked.body.is_active) {
            let result = self.integrator.step(&mut tracked.body, &self.force, dt);
            report.stepped += 1;
            if !result.position.is_finite() {
                warn!("body {} left the finite range; freezing it", tracked.id.0);
                continue;
            }
            report.evicted_points += tracked.path.record(result.position, tracked.regime);
            if result.crashed {
                event!("body {} hit the surface after {} ticks", tracked.id.0, self.ticks + 1);
                report.crashed.push(tracked.id);
            }
        }

        self.ticks += 1;
        report
    }

    /// Run `ticks` ticks, stopping early once nothing is left to integrate.
    pub fn run(&mut self, ticks: u64) -> u64 {
        let mut ran = 0;
        while ran < ticks && self.active_count() > 0 {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Drop every body and path.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.ticks = 0;
    }

    /// Export-friendly view of the session.
    pub fn snapshot<'a>(&'a self, scenario: &'a str) -> SessionSnapshot<'a> {
        SessionSnapshot {
            scenario,
            ticks: self.ticks,
            time_scale: self.time_scale.factor(),
            dt: self.dt(),
            bodies: self
                .bodies
                .iter()
                .map(|tracked| BodyRecord {
                    id: tracked.id.0,
                    regime: tracked.regime.as_str(),
                    active: tracked.body.is_active,
                    position: tracked.body.position.to_array(),
                    velocity: tracked.body.velocity.to_array(),
                    path_points: tracked.path.len(),
                    path_capacity: tracked.path.capacity(),
                })
                .collect(),
        }
    }
}
