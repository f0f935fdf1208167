//! Built-in strategy configurations
//!
//! Swimmer names are often partial ("Rossi M."), team and meeting names are
//! long composite strings; the default biases reflect that.

use crate::candidate::Field;
use crate::store::SearchMethod;
use crate::text::Normalizer;

use super::{EntityType, StrategyConfig};

pub const SWIMMER_BIAS: f64 = 0.8;
pub const TEAM_BIAS: f64 = 0.92;
pub const POOL_BIAS: f64 = 0.88;
pub const MEETING_BIAS: f64 = 0.9;
pub const CITY_BIAS: f64 = 0.89;

pub(super) fn standard(entity: EntityType) -> StrategyConfig {
    match entity {
        EntityType::Swimmer => StrategyConfig {
            entity,
            target: Field::CompleteName,
            filters: vec![
                Field::YearOfBirth,
                Field::GenderTypeId,
                Field::FirstName,
                Field::LastName,
            ],
            search_method: SearchMethod::SwimmersByName,
            bias: SWIMMER_BIAS,
            normalizer: Normalizer::PersonName,
        },
        EntityType::Team => StrategyConfig {
            entity,
            target: Field::Name,
            filters: vec![Field::EditableName, Field::CityId],
            search_method: SearchMethod::TeamsByName,
            bias: TEAM_BIAS,
            normalizer: Normalizer::CodedName,
        },
        EntityType::Pool => StrategyConfig {
            entity,
            target: Field::Name,
            filters: vec![Field::NickName, Field::CityId, Field::PoolTypeId],
            search_method: SearchMethod::PoolsByName,
            bias: POOL_BIAS,
            normalizer: Normalizer::Pool,
        },
        EntityType::Meeting => StrategyConfig {
            entity,
            target: Field::Description,
            filters: vec![Field::SeasonId, Field::HeaderYear],
            search_method: SearchMethod::MeetingsByDescription,
            bias: MEETING_BIAS,
            normalizer: Normalizer::CodedName,
        },
        EntityType::City => StrategyConfig {
            entity,
            target: Field::Name,
            filters: vec![Field::CountryCode, Field::Area],
            search_method: SearchMethod::CitiesByName,
            bias: CITY_BIAS,
            normalizer: Normalizer::City,
        },
    }
}
