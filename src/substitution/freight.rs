pub trait Vehicle {
    fn calculate_cost(&self) -> f64;
}

/// Billed at 0.1 per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truck {
    pub weight: u32,
}

impl Vehicle for Truck {
    fn calculate_cost(&self) -> f64 {
        f64::from(self.weight) * 0.1
    }
}

/// Billed at 100 per container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub containers: u32,
}

impl Vehicle for Ship {
    fn calculate_cost(&self) -> f64 {
        f64::from(self.containers) * 100.0
    }
}

pub fn total_cost(vehicles: &[Box<dyn Vehicle>]) -> f64 {
    vehicles
        .iter()
        .fold(0.0, |total, vehicle| total + vehicle.calculate_cost())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truck_and_ship_rates() {
        assert!((Truck { weight: 5000 }.calculate_cost() - 500.0).abs() < 1e-9);
        assert_eq!(Ship { containers: 10 }.calculate_cost(), 1000.0);
    }

    #[test]
    fn test_total_cost_of_fleet() {
        let fleet: Vec<Box<dyn Vehicle>> = vec![
            Box::new(Truck { weight: 5000 }),
            Box::new(Ship { containers: 10 }),
        ];
        assert_eq!(format!("{:.2}", total_cost(&fleet)), "1500.00");
    }

    #[test]
    fn test_empty_fleet_costs_nothing() {
        assert_eq!(total_cost(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn test_total_cost_is_sum_of_rates(
            loads in proptest::collection::vec((any::<bool>(), 0u32..100_000), 0..16),
        ) {
            let mut expected = 0.0;
            let mut fleet: Vec<Box<dyn Vehicle>> = Vec::new();
            for (by_road, amount) in loads {
                if by_road {
                    expected += f64::from(amount) * 0.1;
                    fleet.push(Box::new(Truck { weight: amount }));
                } else {
                    expected += f64::from(amount) * 100.0;
                    fleet.push(Box::new(Ship { containers: amount }));
                }
            }
            prop_assert_eq!(total_cost(&fleet), expected);
        }
    }
}
