//! Human-readable descriptions of every literature model.
//!
//! Nothing here is used in computations: entries only tell collaborators
//! which curve sits at each model index.
use crate::prelude::{Result, RiskError};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Quantities computed by the risk models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskQuantity {
    HospitalizationProbability,
    HospitalizationOnset,
    Infectiousness,
    Mortality,
}

impl RiskQuantity {
    pub const ALL: [RiskQuantity; 4] = [
        RiskQuantity::HospitalizationProbability,
        RiskQuantity::HospitalizationOnset,
        RiskQuantity::Infectiousness,
        RiskQuantity::Mortality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiskQuantity::HospitalizationProbability => "hospitalization probability",
            RiskQuantity::HospitalizationOnset => "hospitalization onset",
            RiskQuantity::Infectiousness => "infectiousness",
            RiskQuantity::Mortality => "mortality",
        }
    }

    /// Unit of the values returned for this quantity.
    pub fn unit(self) -> &'static str {
        match self {
            RiskQuantity::HospitalizationProbability => "probability",
            RiskQuantity::HospitalizationOnset => "days since infection",
            RiskQuantity::Infectiousness => "relative infectiousness",
            RiskQuantity::Mortality => "probability per day",
        }
    }
}

/// Description of a single literature model.
#[derive(CopyGetters, Debug, Clone, Copy, PartialEq, Serialize)]
#[getset(get_copy = "pub")]
pub struct ModelInfo {
    quantity: RiskQuantity,
    index: usize,
    label: &'static str,
    citation: &'static str,
}

impl ModelInfo {
    const fn new(
        quantity: RiskQuantity,
        index: usize,
        label: &'static str,
        citation: &'static str,
    ) -> Self {
        ModelInfo {
            quantity,
            index,
            label,
            citation,
        }
    }
}

const OSHINUBI: &str = "Hospitalization models prepared by Kayode Isaac Oshinubi";
const KE: &str = "Ke R, Zitzmann C, Ribeiro RM, Perelson AS. Kinetics of SARS-CoV-2 infection \
                  in the human upper and lower respiratory tracts and their relationship with \
                  infectiousness. medRxiv 2020.09.25.20201772";

static HOSPITALIZATION_PROBABILITY_MODELS: [ModelInfo; 3] = [
    ModelInfo::new(
        RiskQuantity::HospitalizationProbability,
        0,
        "Model 1: Low probability",
        OSHINUBI,
    ),
    ModelInfo::new(
        RiskQuantity::HospitalizationProbability,
        1,
        "Model 2: Moderate Probability",
        OSHINUBI,
    ),
    ModelInfo::new(
        RiskQuantity::HospitalizationProbability,
        2,
        "Model 3: High Probability",
        OSHINUBI,
    ),
];

static HOSPITALIZATION_ONSET_MODELS: [ModelInfo; 3] = [
    ModelInfo::new(
        RiskQuantity::HospitalizationOnset,
        0,
        "Model 1: Early Hospitalization",
        OSHINUBI,
    ),
    ModelInfo::new(
        RiskQuantity::HospitalizationOnset,
        1,
        "Model 2: Late Hospitalization",
        OSHINUBI,
    ),
    ModelInfo::new(
        RiskQuantity::HospitalizationOnset,
        2,
        "Model 3: Mixed Hospitalization",
        OSHINUBI,
    ),
];

static INFECTIOUSNESS_MODELS: [ModelInfo; 5] = [
    ModelInfo::new(
        RiskQuantity::Infectiousness,
        0,
        "Model 1: Table 1 Li et. al. DOI: 10.1126/science.abb3221",
        "Li R, Pei S, Chen B, Song Y, Zhang T, Yang W, Shaman J. Substantial undocumented \
         infection facilitates the rapid dissemination of novel coronavirus (SARS-CoV2). \
         Science 368(6490):489-493, 2020",
    ),
    ModelInfo::new(
        RiskQuantity::Infectiousness,
        1,
        "Model 2: Figure 3G Ke et. al. DOI: 10.1101/2020.09.25.20201772",
        KE,
    ),
    ModelInfo::new(
        RiskQuantity::Infectiousness,
        2,
        "Model 3: Figure 3C Ke et. al. DOI: 10.1101/2020.09.25.20201772",
        KE,
    ),
    ModelInfo::new(
        RiskQuantity::Infectiousness,
        3,
        "Model 4: Figure 2a blue Hart et. al. 10.1101/2020.11.20.20235754",
        "Hart WS, Maini PK, Thompson RN. High infectiousness immediately before COVID-19 \
         symptom onset highlights the importance of contact tracing. \
         medRxiv 2020.11.20.20235754",
    ),
    ModelInfo::new(
        RiskQuantity::Infectiousness,
        4,
        "Model 5: Eq 7 Bottcher et. al. 10.1088/1478-3975/ab9e59",
        "Bottcher L, Xia M, Chou T. Why case fatality ratios can be misleading: individual- \
         and population-based mortality estimates and factors influencing them. \
         Physical Biology 17(6), 2020",
    ),
];

static MORTALITY_MODELS: [ModelInfo; 1] = [ModelInfo::new(
    RiskQuantity::Mortality,
    0,
    "Castiglione et. al. DOI: 10.1101/2020.12.20.423670",
    "Castiglione F, Deb D, Srivastava AP, Lio P, Liso A. bioRxiv 2020.12.20.423670",
)];

/// All models available for the given quantity, ordered by model index.
pub fn models(quantity: RiskQuantity) -> &'static [ModelInfo] {
    match quantity {
        RiskQuantity::HospitalizationProbability => &HOSPITALIZATION_PROBABILITY_MODELS,
        RiskQuantity::HospitalizationOnset => &HOSPITALIZATION_ONSET_MODELS,
        RiskQuantity::Infectiousness => &INFECTIOUSNESS_MODELS,
        RiskQuantity::Mortality => &MORTALITY_MODELS,
    }
}

/// Description of a single model.
pub fn model(quantity: RiskQuantity, index: usize) -> Result<&'static ModelInfo> {
    let list = models(quantity);
    list.get(index)
        .ok_or_else(|| RiskError::not_found(quantity.name(), index, list.len()))
}

/// Iterate over every registered model of every quantity.
pub fn all_models() -> impl Iterator<Item = &'static ModelInfo> {
    let quantities: &'static [RiskQuantity] = &RiskQuantity::ALL;
    quantities.iter().flat_map(|&q| models(q).iter())
}
