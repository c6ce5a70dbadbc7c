mod campsite;

pub use campsite::{
    AvailableCampsite, CampsiteAttribute, CampsiteEquipment, CampsiteField, FieldValue,
    Identifier,
};
