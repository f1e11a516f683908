use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::cost_index::{CostCategory, EscalationIndex, IndexDate};
use crate::error::ModelError;
use crate::models::drivetrain::DriveTrain;

/// Bedplate construction variants for the mainframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedplateDesign {
    Standard,
    Modular,
    Integrated,
}

impl BedplateDesign {
    fn mass_factor(&self) -> f64 {
        match self {
            BedplateDesign::Standard => 1.0,
            BedplateDesign::Modular => 0.71,
            BedplateDesign::Integrated => 0.61,
        }
    }
}

impl FromStr for BedplateDesign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(BedplateDesign::Standard),
            "Modular" => Ok(BedplateDesign::Modular),
            "Integrated" => Ok(BedplateDesign::Integrated),
            _ => Err(format!("Unknown bedplate design: {}", s)),
        }
    }
}

impl fmt::Display for BedplateDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedplateDesign::Standard => write!(f, "Standard"),
            BedplateDesign::Modular => write!(f, "Modular"),
            BedplateDesign::Integrated => write!(f, "Integrated"),
        }
    }
}

/// One priced nacelle subassembly. Purchased-part entries carry zero mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NacellePart {
    pub mass: f64,
    pub cost: f64,
}

impl NacellePart {
    fn zero() -> Self {
        NacellePart {
            mass: 0.0,
            cost: 0.0,
        }
    }
}

/// Full nacelle bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nacelle {
    pub low_speed_shaft: NacellePart,
    pub main_bearings: NacellePart,
    pub gearbox: NacellePart,
    pub brake: NacellePart,
    pub generator: NacellePart,
    pub power_electronics: NacellePart,
    pub yaw_system: NacellePart,
    pub mainframe: NacellePart,
    pub platforms: NacellePart,
    pub electrical_connections: NacellePart,
    pub hydraulics: NacellePart,
    pub cover: NacellePart,
    pub control_system: NacellePart,
    pub service_crane: NacellePart,
}

impl Nacelle {
    /// Parts with their report labels, in bill-of-materials order.
    pub fn named_parts(&self) -> [(&'static str, &NacellePart); 14] {
        [
            ("low_speed_shaft", &self.low_speed_shaft),
            ("main_bearings", &self.main_bearings),
            ("gearbox", &self.gearbox),
            ("brake", &self.brake),
            ("generator", &self.generator),
            ("power_electronics", &self.power_electronics),
            ("yaw_system", &self.yaw_system),
            ("mainframe", &self.mainframe),
            ("platforms", &self.platforms),
            ("electrical_connections", &self.electrical_connections),
            ("hydraulics", &self.hydraulics),
            ("cover", &self.cover),
            ("control_system", &self.control_system),
            ("service_crane", &self.service_crane),
        ]
    }

    pub fn total_mass(&self) -> f64 {
        self.named_parts().iter().map(|(_, part)| part.mass).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.named_parts().iter().map(|(_, part)| part.cost).sum()
    }
}

fn low_speed_shaft(
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass = 0.0142 * rotor_diameter.powf(2.888);
    let cost = 0.15
        * rotor_diameter.powf(2.887)
        * index.escalator(
            CostCategory::LowSpeedShaft,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn main_bearings(
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    // Bearing plus housing, sized off the rotor diameter
    let mass = 2.0 * (8.0 * rotor_diameter / 600.0 - 0.033) * 0.0092 * rotor_diameter.powf(2.5);
    let cost = 17.6
        * mass
        * index.escalator(
            CostCategory::MainBearings,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn gearbox(
    drivetrain: DriveTrain,
    rotor_torque: f64,
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let (mass, base_cost) = match drivetrain {
        DriveTrain::ThreeStage => (
            65.601 * rotor_torque.powf(0.759),
            16.45 * machine_rating.powf(1.2491),
        ),
        DriveTrain::SingleStage => (
            81.63967335 * rotor_torque.powf(0.7738),
            74.101 * machine_rating.powf(1.002),
        ),
        DriveTrain::MultiPath => (
            129.1702924 * rotor_torque.powf(0.7738),
            15.25697015 * machine_rating.powf(1.2491),
        ),
        DriveTrain::DirectDrive => return Ok(NacellePart::zero()),
    };
    let cost = base_cost
        * index.escalator(CostCategory::Gearbox, IndexDate::default_reference(), current)?;
    Ok(NacellePart { mass, cost })
}

fn brake(
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let base_cost = 1.9894 * machine_rating - 0.1141;
    let mass = 0.10 * base_cost;
    let cost = base_cost
        * index.escalator(CostCategory::Brake, IndexDate::default_reference(), current)?;
    Ok(NacellePart { mass, cost })
}

fn generator(
    drivetrain: DriveTrain,
    rotor_torque: f64,
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass = match drivetrain {
        DriveTrain::ThreeStage => 6.4737 * machine_rating.powf(0.9223),
        DriveTrain::SingleStage => 10.50972 * machine_rating.powf(0.9223),
        DriveTrain::MultiPath => 5.343902 * machine_rating.powf(0.9223),
        DriveTrain::DirectDrive => 37.68 * rotor_torque,
    };
    let rate = match drivetrain {
        DriveTrain::ThreeStage => 65.0,
        DriveTrain::SingleStage => 54.72533,
        DriveTrain::MultiPath => 48.02963,
        DriveTrain::DirectDrive => 219.3333,
    };
    let cost = rate
        * machine_rating
        * index.escalator(
            CostCategory::Generator,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn power_electronics(
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let cost = 79.32
        * machine_rating
        * index.escalator(
            CostCategory::PowerElectronics,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass: 0.0, cost })
}

fn yaw_system(
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass = 1.6 * (0.0009 * rotor_diameter.powf(3.314));
    let cost = 2.0
        * (0.0339 * rotor_diameter.powf(2.964))
        * index.escalator(
            CostCategory::YawSystem,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn mainframe(
    drivetrain: DriveTrain,
    bedplate: BedplateDesign,
    rotor_diameter: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass_coefficient = match drivetrain {
        DriveTrain::ThreeStage => 2.233,
        DriveTrain::SingleStage => 1.295,
        DriveTrain::MultiPath => 1.721,
        DriveTrain::DirectDrive => 1.228,
    };
    let mass = mass_coefficient * rotor_diameter.powf(1.953) * bedplate.mass_factor();
    let base_cost = match drivetrain {
        DriveTrain::ThreeStage => 9.489 * rotor_diameter.powf(1.953),
        DriveTrain::SingleStage => 303.96 * rotor_diameter.powf(1.067),
        DriveTrain::MultiPath => 17.875 * rotor_diameter.powf(1.672),
        DriveTrain::DirectDrive => 627.28 * rotor_diameter.powf(0.85),
    };
    let cost = base_cost
        * index.escalator(
            CostCategory::Mainframe,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn platforms(
    mainframe_mass: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass = 0.125 * mainframe_mass;
    let cost = 8.7
        * mass
        * index.escalator(
            CostCategory::Mainframe,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn electrical_connections(
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let cost = 40.0
        * machine_rating
        * index.escalator(
            CostCategory::ElectricalConnections,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass: 0.0, cost })
}

fn hydraulics(
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let mass = 0.08 * machine_rating;
    let cost = 12.0
        * machine_rating
        * index.escalator(
            CostCategory::Hydraulics,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn nacelle_cover(
    machine_rating: f64,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let base_cost = 11.537 * machine_rating + 3849.7;
    let mass = 0.10 * base_cost;
    let cost = base_cost
        * index.escalator(
            CostCategory::NacelleCover,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass, cost })
}

fn control_system(
    offshore: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    let base_cost = if offshore { 55900.0 } else { 35000.0 };
    let cost = base_cost
        * index.escalator(
            CostCategory::ControlSystem,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass: 0.0, cost })
}

fn service_crane(
    has_crane: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<NacellePart, ModelError> {
    if !has_crane {
        return Ok(NacellePart::zero());
    }
    let cost = 12000.0
        * index.escalator(
            CostCategory::ServiceCrane,
            IndexDate::default_reference(),
            current,
        )?;
    Ok(NacellePart { mass: 3000.0, cost })
}

#[allow(clippy::too_many_arguments)]
pub fn compute(
    rotor_diameter: f64,
    machine_rating: f64,
    rotor_torque: f64,
    drivetrain: DriveTrain,
    bedplate: BedplateDesign,
    has_crane: bool,
    offshore: bool,
    index: &dyn EscalationIndex,
    current: IndexDate,
) -> Result<Nacelle, ModelError> {
    let mainframe = mainframe(drivetrain, bedplate, rotor_diameter, index, current)?;
    let platforms = platforms(mainframe.mass, index, current)?;
    Ok(Nacelle {
        low_speed_shaft: low_speed_shaft(rotor_diameter, index, current)?,
        main_bearings: main_bearings(rotor_diameter, index, current)?,
        gearbox: gearbox(drivetrain, rotor_torque, machine_rating, index, current)?,
        brake: brake(machine_rating, index, current)?,
        generator: generator(drivetrain, rotor_torque, machine_rating, index, current)?,
        power_electronics: power_electronics(machine_rating, index, current)?,
        yaw_system: yaw_system(rotor_diameter, index, current)?,
        mainframe,
        platforms,
        electrical_connections: electrical_connections(machine_rating, index, current)?,
        hydraulics: hydraulics(machine_rating, index, current)?,
        cover: nacelle_cover(machine_rating, index, current)?,
        control_system: control_system(offshore, index, current)?,
        service_crane: service_crane(has_crane, index, current)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cost_index::UnitIndex;
    use approx::assert_relative_eq;

    const DIAMETER: f64 = 126.0;
    const RATING: f64 = 5000.0;
    const TORQUE: f64 = 4365.250940;
    const CURRENT: IndexDate = IndexDate {
        year: 2009,
        month: 12,
    };

    fn reference_nacelle() -> Nacelle {
        compute(
            DIAMETER,
            RATING,
            TORQUE,
            DriveTrain::ThreeStage,
            BedplateDesign::Standard,
            true,
            true,
            &UnitIndex,
            CURRENT,
        )
        .unwrap()
    }

    #[test]
    fn reference_totals_in_reference_dollars() {
        let nacelle = reference_nacelle();
        assert_relative_eq!(nacelle.total_mass(), 132090.368375, max_relative = 1e-8);
        assert_relative_eq!(nacelle.total_cost(), 2340796.876052, max_relative = 1e-8);
    }

    #[test]
    fn reference_part_breakdown() {
        let nacelle = reference_nacelle();
        assert_relative_eq!(nacelle.low_speed_shaft.mass, 16525.6473, max_relative = 1e-7);
        assert_relative_eq!(nacelle.low_speed_shaft.cost, 173724.4810, max_relative = 1e-7);
        assert_relative_eq!(nacelle.main_bearings.mass, 5400.5474, max_relative = 1e-7);
        assert_relative_eq!(nacelle.gearbox.cost, 686355.8422, max_relative = 1e-7);
        assert_relative_eq!(nacelle.generator.mass, 16699.8513, max_relative = 1e-7);
        assert_relative_eq!(nacelle.generator.cost, 325000.0, max_relative = 1e-9);
        assert_relative_eq!(nacelle.power_electronics.cost, 396600.0, max_relative = 1e-9);
        assert_relative_eq!(nacelle.yaw_system.cost, 113953.5842, max_relative = 1e-7);
        assert_relative_eq!(nacelle.mainframe.mass, 28243.1022, max_relative = 1e-7);
        assert_relative_eq!(nacelle.mainframe.cost, 120017.3743, max_relative = 1e-7);
        assert_relative_eq!(nacelle.platforms.cost, 30714.3737, max_relative = 1e-7);
        assert_relative_eq!(nacelle.cover.cost, 61534.70, max_relative = 1e-7);
        assert_relative_eq!(nacelle.control_system.cost, 55900.0, max_relative = 1e-9);
        assert_relative_eq!(nacelle.service_crane.cost, 12000.0, max_relative = 1e-9);
    }

    #[test]
    fn purchased_parts_carry_no_mass() {
        let nacelle = reference_nacelle();
        assert_eq!(nacelle.power_electronics.mass, 0.0);
        assert_eq!(nacelle.electrical_connections.mass, 0.0);
        assert_eq!(nacelle.control_system.mass, 0.0);
    }

    #[test]
    fn direct_drive_has_no_gearbox() {
        let nacelle = compute(
            DIAMETER,
            RATING,
            TORQUE,
            DriveTrain::DirectDrive,
            BedplateDesign::Standard,
            true,
            true,
            &UnitIndex,
            CURRENT,
        )
        .unwrap();
        assert_eq!(nacelle.gearbox.mass, 0.0);
        assert_eq!(nacelle.gearbox.cost, 0.0);
        // The annular generator picks up the torque dependence instead
        assert_relative_eq!(nacelle.generator.mass, 37.68 * TORQUE, max_relative = 1e-12);
    }

    #[test]
    fn omitting_the_crane_removes_its_mass_and_cost() {
        let with_crane = reference_nacelle();
        let without = compute(
            DIAMETER,
            RATING,
            TORQUE,
            DriveTrain::ThreeStage,
            BedplateDesign::Standard,
            false,
            true,
            &UnitIndex,
            CURRENT,
        )
        .unwrap();
        assert_relative_eq!(
            with_crane.total_cost() - without.total_cost(),
            12000.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            with_crane.total_mass() - without.total_mass(),
            3000.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn land_control_system_is_cheaper() {
        let onshore = compute(
            DIAMETER,
            RATING,
            TORQUE,
            DriveTrain::ThreeStage,
            BedplateDesign::Standard,
            true,
            false,
            &UnitIndex,
            CURRENT,
        )
        .unwrap();
        assert_relative_eq!(onshore.control_system.cost, 35000.0, max_relative = 1e-9);
    }

    #[test]
    fn lighter_bedplates_scale_the_mainframe_mass_only() {
        let standard = reference_nacelle();
        let modular = compute(
            DIAMETER,
            RATING,
            TORQUE,
            DriveTrain::ThreeStage,
            BedplateDesign::Modular,
            true,
            true,
            &UnitIndex,
            CURRENT,
        )
        .unwrap();
        assert_relative_eq!(
            modular.mainframe.mass,
            standard.mainframe.mass * 0.71,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            modular.mainframe.cost,
            standard.mainframe.cost,
            max_relative = 1e-12
        );
    }
}
