use crud::{join_list, FieldSpec, FormDraft, Identified, ListEncoding};
use serde::{Deserialize, Serialize};

use super::{lenient_f64, lenient_u64, number_text, DealershipRef};
use crate::payload::Encoding;
use crate::resource::{Editable, Resource};

const CONDITIONS: &[&str] = &["New", "Used", "Certified Pre-Owned"];
const TRANSMISSIONS: &[&str] = &["Automatic", "Manual", "AMT", "CVT"];
const FUEL_TYPES: &[&str] = &["Petrol", "Diesel", "Electric", "Hybrid", "CNG", "LPG"];
const BODY_TYPES: &[&str] = &[
    "Sedan",
    "SUV",
    "Hatchback",
    "Coupe",
    "Convertible",
    "Truck",
    "Minivan",
    "Van",
    "Wagon",
];
const DRIVE_TRAINS: &[&str] = &["FWD", "RWD", "AWD", "4x4"];
const VEHICLE_STATUSES: &[&str] = &["Available", "Sold", "Pending", "Coming Soon", "Reserved"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub year: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub mileage: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub dealership: Option<DealershipRef>,
    #[serde(default)]
    pub exterior_color: String,
    #[serde(default)]
    pub interior_color: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub engine_size: String,
    #[serde(default)]
    pub drive_train: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub num_doors: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub seating_capacity: Option<u64>,
    #[serde(default, rename = "VIN")]
    pub vin: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub status: String,
}

impl Vehicle {
    /// "2021 Toyota Camry"
    pub fn title(&self) -> String {
        let year = number_text(self.year);
        [year.as_str(), self.brand.as_str(), self.model.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Identified for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Vehicle {
    const PATH: &'static str = "vehicles";
}

impl Editable for Vehicle {
    const ENCODING: Encoding = Encoding::Multipart;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("brand", "Brand").required(),
            FieldSpec::text("model", "Model").required(),
            FieldSpec::number("year", "Year").required(),
            FieldSpec::number("mileage", "Mileage").required(),
            FieldSpec::number("price", "Price").required(),
            FieldSpec::dealership("dealership", "Dealership").required(),
            FieldSpec::text("exteriorColor", "Exterior Color"),
            FieldSpec::text("interiorColor", "Interior Color"),
            FieldSpec::select("condition", "Condition", CONDITIONS),
            FieldSpec::select("transmission", "Transmission", TRANSMISSIONS),
            FieldSpec::select("fuelType", "Fuel Type", FUEL_TYPES).required(),
            FieldSpec::select("bodyType", "Body Type", BODY_TYPES),
            FieldSpec::text("engineSize", "Engine Size").placeholder("e.g. 2.0L"),
            FieldSpec::select("driveTrain", "Drive Train", DRIVE_TRAINS),
            FieldSpec::number("numDoors", "Number of Doors"),
            FieldSpec::number("seatingCapacity", "Seating Capacity"),
            FieldSpec::text("VIN", "VIN"),
            FieldSpec::text("features", "Features")
                .list(ListEncoding::Literal)
                .placeholder("Bluetooth, Backup Camera, Sunroof"),
            FieldSpec::files("images", "Images", "image/*"),
            FieldSpec::file("video", "Video", "video/*").keep_existing_as("videoUrl"),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::checkbox("isFeatured", "Featured vehicle"),
            FieldSpec::select("status", "Status", VEHICLE_STATUSES).required(),
        ]
    }

    fn empty_draft() -> FormDraft {
        let mut draft = FormDraft::blank(&Self::fields());
        draft.set_text("status", "Available");
        draft
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = Self::empty_draft();
        draft.set_text("brand", self.brand.as_str());
        draft.set_text("model", self.model.as_str());
        draft.set_text("year", number_text(self.year));
        draft.set_text("mileage", number_text(self.mileage));
        draft.set_text("price", number_text(self.price));
        draft.set_text(
            "dealership",
            self.dealership.as_ref().map(DealershipRef::id).unwrap_or_default(),
        );
        draft.set_text("exteriorColor", self.exterior_color.as_str());
        draft.set_text("interiorColor", self.interior_color.as_str());
        draft.set_text("condition", self.condition.as_str());
        draft.set_text("transmission", self.transmission.as_str());
        draft.set_text("fuelType", self.fuel_type.as_str());
        draft.set_text("bodyType", self.body_type.as_str());
        draft.set_text("engineSize", self.engine_size.as_str());
        draft.set_text("driveTrain", self.drive_train.as_str());
        draft.set_text("numDoors", number_text(self.num_doors));
        draft.set_text("seatingCapacity", number_text(self.seating_capacity));
        draft.set_text("VIN", self.vin.as_str());
        draft.set_text("features", join_list(&self.features));
        if !self.video.is_empty() {
            draft.set_text("video", self.video.as_str());
        }
        draft.set_text("description", self.description.as_str());
        draft.set_flag("isFeatured", self.is_featured);
        if !self.status.is_empty() {
            draft.set_text("status", self.status.as_str());
        }
        draft
    }
}
