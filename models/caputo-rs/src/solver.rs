use statrs::function::gamma::gamma;

use crate::{output::Solution, parameters::Parameters};

pub struct L1Solver {}

impl L1Solver {
    pub fn solve(parameters: &Parameters) -> Solution {
        let n = (parameters.t_end / parameters.dt).ceil() as usize;
        let mut solution = Solution::new(n, parameters.dt);
        solution.infected[0] = parameters.i0;

        // Base coefficients of the L1 discretisation for the two orders
        let b0_caputo = parameters.dt.powf(-parameters.gamma) / gamma(2.0 - parameters.gamma);
        let b0_memory = parameters.dt.powf(parameters.alpha - parameters.gamma)
            / gamma(2.0 - parameters.gamma + parameters.alpha);
        let denominator = b0_caputo + parameters.nu * b0_memory;
        let ic_weight =
            parameters.nu * parameters.i0 / gamma(1.0 - parameters.gamma + parameters.alpha);

        for j in 1..n {
            let previous = solution.infected[j - 1];

            // Logistic reaction term and the initial-condition part of the memory term
            let mut rhs = parameters.beta * (parameters.capacity - previous) * previous
                - ic_weight
                    * (j as f64 * parameters.dt).powf(parameters.alpha - parameters.gamma);

            // Sum over the full history; every earlier increment keeps a nonzero weight
            for k in 0..j - 1 {
                let lag = (j - k) as f64;
                let w_caputo = b0_caputo
                    * (lag.powf(1.0 - parameters.gamma)
                        - (lag - 1.0).powf(1.0 - parameters.gamma));
                let w_memory = b0_memory
                    * (lag.powf(1.0 - parameters.gamma + parameters.alpha)
                        - (lag - 1.0).powf(1.0 - parameters.gamma + parameters.alpha));
                rhs -= (w_caputo + parameters.nu * w_memory)
                    * (solution.infected[k + 1] - solution.infected[k]);
            }

            solution.infected[j] = rhs / denominator + previous;
        }
        solution
    }
}
