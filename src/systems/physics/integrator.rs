use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::components::StateHistory;

/// Right-hand side of an autonomous or time-varying ODE of fixed dimension `N`.
pub trait Dynamics<const N: usize> {
    fn derivative(&self, t: f64, x: &SVector<f64, N>) -> SVector<f64, N>;
}

impl<const N: usize, F> Dynamics<N> for F
where
    F: Fn(f64, &SVector<f64, N>) -> SVector<f64, N>,
{
    fn derivative(&self, t: f64, x: &SVector<f64, N>) -> SVector<f64, N> {
        self(t, x)
    }
}

/// Fixed-step time marching over a pre-built time grid.
///
/// Column 0 of `history` holds the initial condition. Columns `1..` are filled in
/// order, each from the ones before it. There is no step control and no failure
/// path: NaN or infinity produced by `dynamics` propagates into later columns.
pub trait Integrator {
    fn name(&self) -> &'static str;

    /// Global order of accuracy.
    fn order(&self) -> u32;

    fn integrate<const N: usize, D: Dynamics<N>>(
        &self,
        dynamics: &D,
        times: &[f64],
        history: &mut StateHistory<N>,
        h: f64,
    );
}

fn sample_count<const N: usize>(times: &[f64], history: &StateHistory<N>) -> usize {
    times.len().min(history.len())
}

/// Explicit (forward) Euler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn integrate<const N: usize, D: Dynamics<N>>(
        &self,
        dynamics: &D,
        times: &[f64],
        history: &mut StateHistory<N>,
        h: f64,
    ) {
        for i in 1..sample_count(times, history) {
            let x = *history.column(i - 1);
            let next = x + dynamics.derivative(times[i - 1], &x) * h;
            history.set_column(i, next);
        }
    }
}

/// Two-step Adams-Bashforth, bootstrapped with one Euler step.
///
/// The derivative at the previous sample is carried between steps, so each step
/// costs a single evaluation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdamsBashforth2;

impl Integrator for AdamsBashforth2 {
    fn name(&self) -> &'static str {
        "adams-bashforth-2"
    }

    fn order(&self) -> u32 {
        2
    }

    fn integrate<const N: usize, D: Dynamics<N>>(
        &self,
        dynamics: &D,
        times: &[f64],
        history: &mut StateHistory<N>,
        h: f64,
    ) {
        let samples = sample_count(times, history);
        if samples < 2 {
            return;
        }

        let x0 = *history.column(0);
        let mut previous = dynamics.derivative(times[0], &x0);
        history.set_column(1, x0 + previous * h);

        for i in 2..samples {
            let x = *history.column(i - 1);
            let current = dynamics.derivative(times[i - 1], &x);
            let next = x + current * (1.5 * h) - previous * (0.5 * h);
            history.set_column(i, next);
            previous = current;
        }
    }
}

/// Classical four-stage Runge-Kutta.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn name(&self) -> &'static str {
        "runge-kutta-4"
    }

    fn order(&self) -> u32 {
        4
    }

    fn integrate<const N: usize, D: Dynamics<N>>(
        &self,
        dynamics: &D,
        times: &[f64],
        history: &mut StateHistory<N>,
        h: f64,
    ) {
        let half = 0.5 * h;
        for i in 1..sample_count(times, history) {
            let t = times[i - 1];
            let x = *history.column(i - 1);

            let k1 = dynamics.derivative(t, &x);
            let k2 = dynamics.derivative(t + half, &(x + k1 * half));
            let k3 = dynamics.derivative(t + half, &(x + k2 * half));
            let k4 = dynamics.derivative(t + h, &(x + k3 * h));

            let next = x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0);
            history.set_column(i, next);
        }
    }
}

/// Selectable integration scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    #[serde(alias = "euler")]
    ForwardEuler,
    #[serde(alias = "ab2")]
    AdamsBashforth2,
    #[default]
    #[serde(alias = "rk4")]
    RungeKutta4,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 3] = [
        IntegrationMethod::ForwardEuler,
        IntegrationMethod::AdamsBashforth2,
        IntegrationMethod::RungeKutta4,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntegrationMethod::ForwardEuler => ForwardEuler.name(),
            IntegrationMethod::AdamsBashforth2 => AdamsBashforth2.name(),
            IntegrationMethod::RungeKutta4 => RungeKutta4.name(),
        }
    }

    pub fn order(&self) -> u32 {
        match self {
            IntegrationMethod::ForwardEuler => ForwardEuler.order(),
            IntegrationMethod::AdamsBashforth2 => AdamsBashforth2.order(),
            IntegrationMethod::RungeKutta4 => RungeKutta4.order(),
        }
    }

    pub fn integrate<const N: usize, D: Dynamics<N>>(
        &self,
        dynamics: &D,
        times: &[f64],
        history: &mut StateHistory<N>,
        h: f64,
    ) {
        match self {
            IntegrationMethod::ForwardEuler => ForwardEuler.integrate(dynamics, times, history, h),
            IntegrationMethod::AdamsBashforth2 => {
                AdamsBashforth2.integrate(dynamics, times, history, h)
            }
            IntegrationMethod::RungeKutta4 => RungeKutta4.integrate(dynamics, times, history, h),
        }
    }
}
