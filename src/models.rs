// Domain entity types for the back office

use crate::error::StoreError;
use crate::export::ExportSpec;
use crate::record::{IdSpec, Record, or_default};
use serde::{Deserialize, Serialize};

/// Extended-warranty contract record
///
/// Field names serialize in camelCase: the persisted blobs are the external
/// contract carried over from the browser-local storage format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub id: String,
    /// Owner or company name
    pub company: String,
    pub phone: String,
    pub responsible: String,
    pub store: String,
    pub store_code: String,
    pub payment: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub count: u32,
    pub vehicle_type: Option<String>,
    pub id_number: Option<String>,
    pub frame_number: Option<String>,
    pub vehicle_model: Option<String>,
    pub customer_address: Option<String>,
    pub vehicle_license_number: Option<String>,
    pub gender: Option<String>,
    pub license_plate: Option<String>,
    pub engine_number: Option<String>,
    pub vehicle_color: Option<String>,
    pub purchase_price: Option<String>,
    pub purchase_date: Option<String>,
    pub vehicle_usage: Option<String>,
    pub displacement: Option<String>,
    pub vehicle_remark: Option<String>,
    pub insurance_company: Option<String>,
    pub compulsory_policy_number: Option<String>,
    pub commercial_policy_number: Option<String>,
    pub insurance_start_date: Option<String>,
    pub insurance_end_date: Option<String>,
    pub is_renewal: Option<String>,
    pub handling_time: Option<String>,
    pub insurance_remark: Option<String>,
}

/// Warranty create/edit form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyInput {
    pub customer_name: String,
    pub customer_phone: String,
    pub responsible: String,
    pub store: String,
    pub store_code: String,
    pub payment: String,
    pub vehicle_type: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub customer_address: Option<String>,
    pub vehicle_frame_number: Option<String>,
    pub vehicle_license_number: Option<String>,
    pub gender: Option<String>,
    pub vehicle_model: Option<String>,
    pub license_plate: Option<String>,
    pub engine_number: Option<String>,
    pub vehicle_color: Option<String>,
    pub purchase_price: Option<String>,
    pub purchase_date: Option<String>,
    pub vehicle_usage: Option<String>,
    pub displacement: Option<String>,
    pub vehicle_remark: Option<String>,
    pub insurance_company: Option<String>,
    pub compulsory_policy_number: Option<String>,
    pub commercial_policy_number: Option<String>,
    pub insurance_start_date: Option<String>,
    pub insurance_end_date: Option<String>,
    pub is_renewal: Option<String>,
    pub handling_time: Option<String>,
    pub insurance_remark: Option<String>,
}

impl Record for Warranty {
    type Input = WarrantyInput;

    fn collection_name() -> &'static str {
        "warranties"
    }

    fn id_spec() -> IdSpec {
        IdSpec {
            prefix: "ZY",
            low: 10_000_000,
            span: 90_000_000,
        }
    }

    fn validate(input: &WarrantyInput) -> Result<(), StoreError> {
        if input.customer_name.trim().is_empty() {
            return Err(StoreError::Validation("customer name is required".to_string()));
        }
        if input.customer_phone.trim().is_empty() {
            return Err(StoreError::Validation("customer phone is required".to_string()));
        }
        Ok(())
    }

    fn from_input(id: String, now: &str, input: WarrantyInput) -> Self {
        Self {
            id,
            company: input.customer_name,
            phone: input.customer_phone,
            responsible: or_default(input.responsible, "系统管理员"),
            store: or_default(input.store, "甘肃兰州神迈领克"),
            store_code: or_default(input.store_code, "10000267"),
            payment: or_default(input.payment, "0"),
            status: "已下单".to_string(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
            count: 1,
            vehicle_type: input.vehicle_type,
            id_number: input.id_number,
            frame_number: input.vehicle_frame_number,
            vehicle_model: input.vehicle_model,
            customer_address: input.customer_address,
            vehicle_license_number: input.vehicle_license_number,
            gender: input.gender,
            license_plate: input.license_plate,
            engine_number: input.engine_number,
            vehicle_color: input.vehicle_color,
            purchase_price: input.purchase_price,
            purchase_date: input.purchase_date,
            vehicle_usage: input.vehicle_usage,
            displacement: input.displacement,
            vehicle_remark: input.vehicle_remark,
            insurance_company: input.insurance_company,
            compulsory_policy_number: input.compulsory_policy_number,
            commercial_policy_number: input.commercial_policy_number,
            insurance_start_date: input.insurance_start_date,
            insurance_end_date: input.insurance_end_date,
            is_renewal: input.is_renewal,
            handling_time: input.handling_time,
            insurance_remark: input.insurance_remark,
        }
    }

    fn apply_input(&mut self, input: WarrantyInput, now: &str) {
        self.company = input.customer_name;
        self.phone = input.customer_phone;
        // Blank admin fields keep their stored values on edit.
        if !input.responsible.is_empty() {
            self.responsible = input.responsible;
        }
        if !input.store.is_empty() {
            self.store = input.store;
        }
        if !input.store_code.is_empty() {
            self.store_code = input.store_code;
        }
        if !input.payment.is_empty() {
            self.payment = input.payment;
        }
        self.vehicle_type = input.vehicle_type;
        self.id_number = input.id_number;
        self.frame_number = input.vehicle_frame_number;
        self.vehicle_model = input.vehicle_model;
        self.customer_address = input.customer_address;
        self.vehicle_license_number = input.vehicle_license_number;
        self.gender = input.gender;
        self.license_plate = input.license_plate;
        self.engine_number = input.engine_number;
        self.vehicle_color = input.vehicle_color;
        self.purchase_price = input.purchase_price;
        self.purchase_date = input.purchase_date;
        self.vehicle_usage = input.vehicle_usage;
        self.displacement = input.displacement;
        self.vehicle_remark = input.vehicle_remark;
        self.insurance_company = input.insurance_company;
        self.compulsory_policy_number = input.compulsory_policy_number;
        self.commercial_policy_number = input.commercial_policy_number;
        self.insurance_start_date = input.insurance_start_date;
        self.insurance_end_date = input.insurance_end_date;
        self.is_renewal = input.is_renewal;
        self.handling_time = input.handling_time;
        self.insurance_remark = input.insurance_remark;
        self.updated_at = now.to_string();
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "company" => Some(self.company.clone()),
            "phone" => Some(self.phone.clone()),
            "responsible" => Some(self.responsible.clone()),
            "store" => Some(self.store.clone()),
            "storeCode" => Some(self.store_code.clone()),
            "payment" => Some(self.payment.clone()),
            "status" => Some(self.status.clone()),
            "createdAt" => Some(self.created_at.clone()),
            "updatedAt" => Some(self.updated_at.clone()),
            "count" => Some(self.count.to_string()),
            "vehicleType" => self.vehicle_type.clone(),
            "idNumber" => self.id_number.clone(),
            "frameNumber" => self.frame_number.clone(),
            "vehicleModel" => self.vehicle_model.clone(),
            "customerAddress" => self.customer_address.clone(),
            "vehicleLicenseNumber" => self.vehicle_license_number.clone(),
            "gender" => self.gender.clone(),
            "licensePlate" => self.license_plate.clone(),
            "engineNumber" => self.engine_number.clone(),
            "vehicleColor" => self.vehicle_color.clone(),
            "purchasePrice" => self.purchase_price.clone(),
            "purchaseDate" => self.purchase_date.clone(),
            "vehicleUsage" => self.vehicle_usage.clone(),
            "displacement" => self.displacement.clone(),
            "vehicleRemark" => self.vehicle_remark.clone(),
            "insuranceCompany" => self.insurance_company.clone(),
            "compulsoryPolicyNumber" => self.compulsory_policy_number.clone(),
            "commercialPolicyNumber" => self.commercial_policy_number.clone(),
            "insuranceStartDate" => self.insurance_start_date.clone(),
            "insuranceEndDate" => self.insurance_end_date.clone(),
            "isRenewal" => self.is_renewal.clone(),
            "handlingTime" => self.handling_time.clone(),
            "insuranceRemark" => self.insurance_remark.clone(),
            _ => None,
        }
    }
}

/// Column layout of the warranty CSV export
pub fn warranty_export_spec() -> ExportSpec {
    ExportSpec::new(
        "延保数据",
        vec![
            "保单号",
            "车主/公司",
            "联系电话",
            "经办人",
            "门店",
            "门店编码",
            "支付备注",
            "订单状态",
            "创建时间",
            "车主类型",
            "证件号码",
            "车架号",
            "厂牌型号",
            "车牌号",
            "发动机号",
            "车身颜色",
            "初登日期",
        ],
        vec![
            "id",
            "company",
            "phone",
            "responsible",
            "store",
            "storeCode",
            "payment",
            "status",
            "createdAt",
            "vehicleType",
            "idNumber",
            "frameNumber",
            "vehicleModel",
            "licensePlate",
            "engineNumber",
            "vehicleColor",
            "purchaseDate",
        ],
    )
    .expect("header/field lists are the same length")
}

/// The three built-in warranty records used when no durable state exists
pub fn seed_warranties() -> Vec<Warranty> {
    let base = Warranty {
        id: String::new(),
        company: String::new(),
        phone: String::new(),
        responsible: String::new(),
        store: "甘肃兰州神迈领克".to_string(),
        store_code: "10000267".to_string(),
        payment: String::new(),
        status: "已下单".to_string(),
        created_at: String::new(),
        updated_at: String::new(),
        count: 1,
        vehicle_type: Some("个人".to_string()),
        id_number: None,
        frame_number: None,
        vehicle_model: None,
        customer_address: None,
        vehicle_license_number: None,
        gender: None,
        license_plate: None,
        engine_number: None,
        vehicle_color: None,
        purchase_price: None,
        purchase_date: None,
        vehicle_usage: None,
        displacement: None,
        vehicle_remark: None,
        insurance_company: None,
        compulsory_policy_number: None,
        commercial_policy_number: None,
        insurance_start_date: None,
        insurance_end_date: None,
        is_renewal: None,
        handling_time: None,
        insurance_remark: None,
    };

    vec![
        Warranty {
            id: "ZY10025627".to_string(),
            company: "宋生鹏".to_string(),
            phone: "18693582595".to_string(),
            responsible: "乔亚嘉王静".to_string(),
            payment: "特殊订单提前报备".to_string(),
            created_at: "2025-04-19 23:26:17".to_string(),
            updated_at: "2025-04-19 23:26:17".to_string(),
            id_number: Some("620102199001011234".to_string()),
            frame_number: Some("LSGPC52U6LF123456".to_string()),
            vehicle_model: Some("领克03 2023款 2.0T".to_string()),
            ..base.clone()
        },
        Warranty {
            id: "ZY10025521".to_string(),
            company: "罗浩鹏".to_string(),
            phone: "15101868727".to_string(),
            responsible: "乔亚嘉王静".to_string(),
            payment: "6880".to_string(),
            created_at: "2025-04-18 23:40:23".to_string(),
            updated_at: "2025-04-18 23:40:23".to_string(),
            id_number: Some("620102199002021234".to_string()),
            frame_number: Some("LSGPC52U6LF234567".to_string()),
            vehicle_model: Some("领克01 2023款 2.0T".to_string()),
            ..base.clone()
        },
        Warranty {
            id: "ZY10024833".to_string(),
            company: "王慧".to_string(),
            phone: "15095776983".to_string(),
            responsible: "乔亚嘉".to_string(),
            payment: "分期".to_string(),
            created_at: "2025-04-12 20:22:24".to_string(),
            updated_at: "2025-04-12 20:22:24".to_string(),
            id_number: Some("620102199003031234".to_string()),
            frame_number: Some("LSGPC52U6LF345678".to_string()),
            vehicle_model: Some("领克02 2023款 2.0T".to_string()),
            ..base
        },
    ]
}

/// Daily sales report record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: String,
    pub name: String,
    pub store: String,
    pub date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    // Morning section
    pub morning_work: Option<String>,
    pub morning_result: Option<String>,
    pub morning_issue: Option<String>,
    pub morning_solution: Option<String>,
    pub morning_remark1: Option<String>,
    pub morning_remark2: Option<String>,
    // Day section
    pub day_summary: Option<String>,
    pub policy_count: Option<String>,
    pub policy_amount: Option<String>,
    pub customer_count: Option<String>,
    pub callback_count: Option<String>,
    pub new_customer_count: Option<String>,
    pub conversion_rate: Option<String>,
    pub tomorrow_plan: Option<String>,
    // Week section
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
    // Month section
    pub month_summary: Option<String>,
    pub next_month_plan: Option<String>,
}

/// Daily report create/edit form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportInput {
    pub name: String,
    pub store: String,
    pub date: String,
    pub morning_work: Option<String>,
    pub morning_result: Option<String>,
    pub morning_issue: Option<String>,
    pub morning_solution: Option<String>,
    pub morning_remark1: Option<String>,
    pub morning_remark2: Option<String>,
    pub day_summary: Option<String>,
    pub policy_count: Option<String>,
    pub policy_amount: Option<String>,
    pub customer_count: Option<String>,
    pub callback_count: Option<String>,
    pub new_customer_count: Option<String>,
    pub conversion_rate: Option<String>,
    pub tomorrow_plan: Option<String>,
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
    pub month_summary: Option<String>,
    pub next_month_plan: Option<String>,
}

impl Record for DailyReport {
    type Input = DailyReportInput;

    fn collection_name() -> &'static str {
        "daily_reports"
    }

    fn id_spec() -> IdSpec {
        IdSpec {
            prefix: "",
            low: 63000,
            span: 10000,
        }
    }

    fn validate(input: &DailyReportInput) -> Result<(), StoreError> {
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("name is required".to_string()));
        }
        if input.store.trim().is_empty() {
            return Err(StoreError::Validation("store is required".to_string()));
        }
        if input.date.trim().is_empty() {
            return Err(StoreError::Validation("date is required".to_string()));
        }
        Ok(())
    }

    fn from_input(id: String, now: &str, input: DailyReportInput) -> Self {
        Self {
            id,
            name: input.name,
            store: input.store,
            date: input.date,
            status: "正常".to_string(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
            morning_work: input.morning_work,
            morning_result: input.morning_result,
            morning_issue: input.morning_issue,
            morning_solution: input.morning_solution,
            morning_remark1: input.morning_remark1,
            morning_remark2: input.morning_remark2,
            day_summary: input.day_summary,
            policy_count: input.policy_count,
            policy_amount: input.policy_amount,
            customer_count: input.customer_count,
            callback_count: input.callback_count,
            new_customer_count: input.new_customer_count,
            conversion_rate: input.conversion_rate,
            tomorrow_plan: input.tomorrow_plan,
            monday: input.monday,
            tuesday: input.tuesday,
            wednesday: input.wednesday,
            thursday: input.thursday,
            friday: input.friday,
            saturday: input.saturday,
            sunday: input.sunday,
            month_summary: input.month_summary,
            next_month_plan: input.next_month_plan,
        }
    }

    fn apply_input(&mut self, input: DailyReportInput, now: &str) {
        self.name = input.name;
        self.store = input.store;
        self.date = input.date;
        self.morning_work = input.morning_work;
        self.morning_result = input.morning_result;
        self.morning_issue = input.morning_issue;
        self.morning_solution = input.morning_solution;
        self.morning_remark1 = input.morning_remark1;
        self.morning_remark2 = input.morning_remark2;
        self.day_summary = input.day_summary;
        self.policy_count = input.policy_count;
        self.policy_amount = input.policy_amount;
        self.customer_count = input.customer_count;
        self.callback_count = input.callback_count;
        self.new_customer_count = input.new_customer_count;
        self.conversion_rate = input.conversion_rate;
        self.tomorrow_plan = input.tomorrow_plan;
        self.monday = input.monday;
        self.tuesday = input.tuesday;
        self.wednesday = input.wednesday;
        self.thursday = input.thursday;
        self.friday = input.friday;
        self.saturday = input.saturday;
        self.sunday = input.sunday;
        self.month_summary = input.month_summary;
        self.next_month_plan = input.next_month_plan;
        self.updated_at = now.to_string();
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "store" => Some(self.store.clone()),
            "date" => Some(self.date.clone()),
            "status" => Some(self.status.clone()),
            "createdAt" => Some(self.created_at.clone()),
            "updatedAt" => Some(self.updated_at.clone()),
            "daySummary" => self.day_summary.clone(),
            "policyCount" => self.policy_count.clone(),
            "policyAmount" => self.policy_amount.clone(),
            "customerCount" => self.customer_count.clone(),
            "callbackCount" => self.callback_count.clone(),
            "newCustomerCount" => self.new_customer_count.clone(),
            "conversionRate" => self.conversion_rate.clone(),
            _ => None,
        }
    }
}

/// The built-in daily report used when no durable state exists
pub fn seed_daily_reports() -> Vec<DailyReport> {
    vec![DailyReport {
        id: "63518".to_string(),
        name: "王静".to_string(),
        store: "甘肃兰州神迈领克".to_string(),
        date: "2025-04-21".to_string(),
        status: "正常".to_string(),
        created_at: "2025-04-21 01:59:51".to_string(),
        updated_at: "2025-04-21 02:09:23".to_string(),
        morning_work: Some(
            "1. 整理客户资料，更新客户跟进记录\n2. 联系3位潜在客户，介绍新车型及保险方案\n3. 准备下午客户演示材料"
                .to_string(),
        ),
        morning_result: Some(
            "1. 完成15位客户资料更新\n2. 成功预约2位客户下周到店看车\n3. 完成演示PPT制作".to_string(),
        ),
        morning_issue: Some("客户对新车型保险方案有疑问，需要更详细的解释".to_string()),
        morning_solution: Some("准备了详细的保险方案对比表，包含不同档次的保障内容和价格".to_string()),
        morning_remark1: Some("今日上午客流量较少，主要以电话沟通为主".to_string()),
        morning_remark2: Some("需要更新产品手册，部分资料已过时".to_string()),
        day_summary: Some(
            "今日完成了客户资料整理和潜在客户沟通工作，为两位客户提供了详细的保险方案，并成功签约一位客户。"
                .to_string(),
        ),
        policy_count: Some("1".to_string()),
        policy_amount: Some("6800".to_string()),
        customer_count: Some("3".to_string()),
        callback_count: Some("5".to_string()),
        new_customer_count: Some("1".to_string()),
        conversion_rate: Some("33".to_string()),
        tomorrow_plan: Some("1. 跟进今日预约的客户\n2. 完成产品手册更新\n3. 参加早会培训".to_string()),
        monday: Some("客户回访，资料整理".to_string()),
        tuesday: Some("新客户接待，保单签约".to_string()),
        wednesday: Some("产品培训，客户预约".to_string()),
        thursday: Some("外出拜访客户，保单跟进".to_string()),
        friday: Some("团队会议，周报准备".to_string()),
        saturday: Some("周末值班，新客户接待".to_string()),
        sunday: Some("休息".to_string()),
        month_summary: Some(
            "本月共完成保单15份，总保费金额98,600元，较上月增长12%。新增客户8位，客户满意度调查结果良好。"
                .to_string(),
        ),
        next_month_plan: Some(
            "1. 提高保单转化率，目标达到40%\n2. 加强团队协作，提高客户服务质量\n3. 学习新产品知识，提升专业能力"
                .to_string(),
        ),
    }]
}

/// Store directory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub product: String,
    pub brand: String,
    pub vehicle_type: String,
    pub sales_person: String,
    pub store_person: String,
    pub recorder: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Store directory form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecordInput {
    pub code: String,
    pub name: String,
    pub product: String,
    pub brand: String,
    pub vehicle_type: String,
    pub sales_person: String,
    pub store_person: String,
    pub recorder: String,
    pub status: String,
}

impl Record for StoreRecord {
    type Input = StoreRecordInput;

    fn collection_name() -> &'static str {
        "stores"
    }

    fn id_spec() -> IdSpec {
        IdSpec {
            prefix: "",
            low: 1000,
            span: 9000,
        }
    }

    fn validate(input: &StoreRecordInput) -> Result<(), StoreError> {
        if input.name.trim().is_empty() {
            return Err(StoreError::Validation("store name is required".to_string()));
        }
        if input.code.trim().is_empty() {
            return Err(StoreError::Validation("store code is required".to_string()));
        }
        Ok(())
    }

    fn from_input(id: String, now: &str, input: StoreRecordInput) -> Self {
        Self {
            id,
            code: input.code,
            name: input.name,
            product: input.product,
            brand: input.brand,
            vehicle_type: input.vehicle_type,
            sales_person: input.sales_person,
            store_person: input.store_person,
            recorder: or_default(input.recorder, "-"),
            status: or_default(input.status, "正常"),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn apply_input(&mut self, input: StoreRecordInput, now: &str) {
        self.code = input.code;
        self.name = input.name;
        self.product = input.product;
        self.brand = input.brand;
        self.vehicle_type = input.vehicle_type;
        self.sales_person = input.sales_person;
        self.store_person = input.store_person;
        if !input.recorder.is_empty() {
            self.recorder = input.recorder;
        }
        if !input.status.is_empty() {
            self.status = input.status;
        }
        self.updated_at = now.to_string();
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "code" => Some(self.code.clone()),
            "name" => Some(self.name.clone()),
            "product" => Some(self.product.clone()),
            "brand" => Some(self.brand.clone()),
            "vehicleType" => Some(self.vehicle_type.clone()),
            "salesPerson" => Some(self.sales_person.clone()),
            "storePerson" => Some(self.store_person.clone()),
            "recorder" => Some(self.recorder.clone()),
            "status" => Some(self.status.clone()),
            "createdAt" => Some(self.created_at.clone()),
            "updatedAt" => Some(self.updated_at.clone()),
            _ => None,
        }
    }
}

/// The three built-in store directory entries
pub fn seed_stores() -> Vec<StoreRecord> {
    vec![
        StoreRecord {
            id: "1".to_string(),
            code: "10000267".to_string(),
            name: "甘肃兰州神迈领克".to_string(),
            product: "延保".to_string(),
            brand: "领克".to_string(),
            vehicle_type: "新能源".to_string(),
            sales_person: "甘肃兰州神迈领克".to_string(),
            store_person: "甘肃兰州神迈领克".to_string(),
            recorder: "-".to_string(),
            status: "正常".to_string(),
            created_at: "2025-03-25 18:43:57".to_string(),
            updated_at: "2025-03-25 18:43:57".to_string(),
        },
        StoreRecord {
            id: "2".to_string(),
            code: "10000268".to_string(),
            name: "甘肃兰州神迈沃尔沃".to_string(),
            product: "保险".to_string(),
            brand: "沃尔沃".to_string(),
            vehicle_type: "燃油车".to_string(),
            sales_person: "甘肃兰州神迈沃尔沃".to_string(),
            store_person: "甘肃兰州神迈沃尔沃".to_string(),
            recorder: "张三".to_string(),
            status: "正常".to_string(),
            created_at: "2025-03-24 14:22:31".to_string(),
            updated_at: "2025-03-24 14:22:31".to_string(),
        },
        StoreRecord {
            id: "3".to_string(),
            code: "10000269".to_string(),
            name: "甘肃兰州神迈吉利".to_string(),
            product: "延保".to_string(),
            brand: "吉利".to_string(),
            vehicle_type: "混合动力".to_string(),
            sales_person: "甘肃兰州神迈吉利".to_string(),
            store_person: "甘肃兰州神迈吉利".to_string(),
            recorder: "李四".to_string(),
            status: "停用".to_string(),
            created_at: "2025-03-23 09:15:42".to_string(),
            updated_at: "2025-03-23 09:15:42".to_string(),
        },
    ]
}

/// File-export log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJob {
    pub id: String,
    pub batch_id: String,
    pub business_type: String,
    pub file_name: String,
    pub file_size: String,
    pub status: String,
    pub creator: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Export log form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJobInput {
    pub batch_id: String,
    pub business_type: String,
    pub file_name: String,
    pub file_size: String,
    pub status: String,
    pub creator: String,
}

impl Record for ExportJob {
    type Input = ExportJobInput;

    fn collection_name() -> &'static str {
        "export_jobs"
    }

    fn id_spec() -> IdSpec {
        IdSpec {
            prefix: "EXP",
            low: 100_000_000,
            span: 900_000_000,
        }
    }

    fn validate(input: &ExportJobInput) -> Result<(), StoreError> {
        if input.file_name.trim().is_empty() {
            return Err(StoreError::Validation("file name is required".to_string()));
        }
        Ok(())
    }

    fn from_input(id: String, now: &str, input: ExportJobInput) -> Self {
        Self {
            id,
            batch_id: input.batch_id,
            business_type: input.business_type,
            file_name: input.file_name,
            file_size: input.file_size,
            status: or_default(input.status, "完成"),
            creator: input.creator,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn apply_input(&mut self, input: ExportJobInput, now: &str) {
        self.batch_id = input.batch_id;
        self.business_type = input.business_type;
        self.file_name = input.file_name;
        self.file_size = input.file_size;
        if !input.status.is_empty() {
            self.status = input.status;
        }
        self.creator = input.creator;
        self.updated_at = now.to_string();
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "batchId" => Some(self.batch_id.clone()),
            "businessType" => Some(self.business_type.clone()),
            "fileName" => Some(self.file_name.clone()),
            "fileSize" => Some(self.file_size.clone()),
            "status" => Some(self.status.clone()),
            "creator" => Some(self.creator.clone()),
            "createdAt" => Some(self.created_at.clone()),
            "updatedAt" => Some(self.updated_at.clone()),
            _ => None,
        }
    }
}

/// The two built-in export log entries
pub fn seed_export_jobs() -> Vec<ExportJob> {
    vec![
        ExportJob {
            id: "EXP20250421001".to_string(),
            batch_id: "B20250421001".to_string(),
            business_type: "延保".to_string(),
            file_name: "延保数据_2025-04-21.csv".to_string(),
            file_size: "1.2MB".to_string(),
            status: "完成".to_string(),
            creator: "王静".to_string(),
            created_at: "2025-04-21 10:30:45".to_string(),
            updated_at: "2025-04-21 10:30:45".to_string(),
        },
        ExportJob {
            id: "EXP20250420002".to_string(),
            batch_id: "B20250420002".to_string(),
            business_type: "保险".to_string(),
            file_name: "保险数据_2025-04-20.csv".to_string(),
            file_size: "2.5MB".to_string(),
            status: "完成".to_string(),
            creator: "乔亚嘉".to_string(),
            created_at: "2025-04-20 15:22:18".to_string(),
            updated_at: "2025-04-20 15:22:18".to_string(),
        },
    ]
}
