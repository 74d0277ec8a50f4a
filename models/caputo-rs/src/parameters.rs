use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("alpha and gamma need to satisfy 0 < alpha <= gamma <= 1 (alpha = {alpha}, gamma = {gamma})")]
    FractionalOrder { alpha: f64, gamma: f64 },
    #[error("the initial condition needs to satisfy 0 <= i0 <= {capacity} (i0 = {i0})")]
    InitialCondition { i0: f64, capacity: f64 },
    #[error("the time grid needs to satisfy t_end > 0 and dt > 0 (t_end = {t_end}, dt = {dt})")]
    TimeGrid { t_end: f64, dt: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Caputo differentiation order
    pub gamma: f64,
    /// gamma - alpha is the Riemann-Liouville differentiation order
    pub alpha: f64,
    pub beta: f64,
    pub nu: f64,
    pub capacity: f64,
    pub i0: f64,
    pub t_end: f64,
    pub dt: f64,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            gamma: 1.0,
            alpha: 0.95,
            beta: 0.02,
            nu: 1.0,
            capacity: 100.0,
            i0: 2.0,
            t_end: 100.0,
            dt: 0.05,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !(self.alpha > 0.0 && self.alpha <= self.gamma && self.gamma <= 1.0) {
            return Err(InvalidParameter::FractionalOrder {
                alpha: self.alpha,
                gamma: self.gamma,
            });
        }
        if !(self.i0 >= 0.0 && self.i0 <= self.capacity) {
            return Err(InvalidParameter::InitialCondition {
                i0: self.i0,
                capacity: self.capacity,
            });
        }
        if !(self.t_end > 0.0 && self.dt > 0.0) {
            return Err(InvalidParameter::TimeGrid {
                t_end: self.t_end,
                dt: self.dt,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::parameters::{InvalidParameter, Parameters};

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Parameters::default().validate(), Ok(()));
    }

    #[test]
    fn test_fractional_order_rejection() {
        let parameters = Parameters {
            alpha: 1.5,
            ..Parameters::default()
        };
        assert_eq!(
            parameters.validate(),
            Err(InvalidParameter::FractionalOrder {
                alpha: 1.5,
                gamma: 1.0
            })
        );

        let parameters = Parameters {
            gamma: 1.2,
            alpha: 1.1,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::FractionalOrder { .. })
        ));

        let parameters = Parameters {
            alpha: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::FractionalOrder { .. })
        ));

        // NaN orders cannot satisfy the invariant either
        let parameters = Parameters {
            gamma: f64::NAN,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::FractionalOrder { .. })
        ));
    }

    #[test]
    fn test_initial_condition_rejection() {
        let parameters = Parameters {
            i0: 150.0,
            ..Parameters::default()
        };
        assert_eq!(
            parameters.validate(),
            Err(InvalidParameter::InitialCondition {
                i0: 150.0,
                capacity: 100.0
            })
        );

        let parameters = Parameters {
            i0: -1.0,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::InitialCondition { .. })
        ));
    }

    #[test]
    fn test_time_grid_rejection() {
        let parameters = Parameters {
            dt: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::TimeGrid { .. })
        ));

        let parameters = Parameters {
            t_end: -1.0,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(InvalidParameter::TimeGrid { .. })
        ));
    }

    #[test]
    fn test_input_defaults() {
        let parameters: Parameters = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parameters, Parameters::default());

        let parameters: Parameters =
            serde_json::from_value(serde_json::json!({ "gamma": 0.8, "alpha": 0.7 })).unwrap();
        assert_eq!(parameters.gamma, 0.8);
        assert_eq!(parameters.alpha, 0.7);
        assert_eq!(parameters.beta, Parameters::default().beta);
    }

    #[test]
    fn test_error_messages_name_the_bounds() {
        let err = Parameters {
            i0: 150.0,
            ..Parameters::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "the initial condition needs to satisfy 0 <= i0 <= 100 (i0 = 150)"
        );
    }
}
