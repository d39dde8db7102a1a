//! Recognized-text fixtures for label verification tests

/// A label as returned by OCR, with the values an applicant would declare for it
#[derive(Debug, Clone)]
pub struct TestLabelFixture {
    pub name: &'static str,
    pub ocr_text: &'static str,
    pub brand_name: &'static str,
    pub product_class: &'static str,
    pub alcohol_content: &'static str,
    pub net_contents: Option<&'static str>,
    pub category: Option<&'static str>,
}

pub const OLD_TOM_BOURBON: TestLabelFixture = TestLabelFixture {
    name: "Old Tom Distillery Bourbon",
    ocr_text: "OLD TOM DISTILLERY\n\
KENTUCKY STRAIGHT\nBOURBON WHISKEY\n\
45% ALC/VOL (90 PROOF)\n750 ML\n\
GOVERNMENT WARNING: (1) According to the Surgeon General, women should not drink\n\
alcoholic beverages during pregnancy because of the risk of birth defects. (2) Consumption\n\
of alcoholic beverages impairs your ability to drive a car or operate machinery, and may\n\
cause health problems.\n\
BOTTLED BY OLD TOM DISTILLERY, BARDSTOWN, KY",
    brand_name: "Old Tom Distillery",
    product_class: "Kentucky Straight Bourbon Whiskey",
    alcohol_content: "45",
    net_contents: Some("750 mL"),
    category: None,
};

pub const HAWKS_SHADOW_MUSCAT: TestLabelFixture = TestLabelFixture {
    name: "Hawk's Shadow Orange Muscat",
    ocr_text: "HAWK\u{2019}S SHADOW ESTATE\n\
2021 Orange Muscat\n\
ALC. 13.68% BY VOL.\n\
CONTAINS SULFITES\n\
Produced and bottled by Hawk's Shadow Winery, Paso Robles, CA",
    brand_name: "Hawk's Shadow Estate",
    product_class: "Orange Muscat",
    alcohol_content: "13.68",
    net_contents: None,
    category: None,
};

pub const TREE_HOUSE_IPA: TestLabelFixture = TestLabelFixture {
    name: "Tree House Double IPA",
    ocr_text: "TREE HOUSE BREWING CO.\nDOUBLE IPA\n8.2% ALC/VOL\n16 FL OZ",
    brand_name: "Tree House Brewing",
    product_class: "Double IPA",
    alcohol_content: "8.2",
    net_contents: Some("16 fl oz"),
    category: Some("beer"),
};
