// Plain-text daily report block for the clipboard "copy" action

use crate::models::DailyReport;

/// Missing numeric fields render as "0"
fn num(value: &Option<String>) -> &str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or("0")
}

/// Missing narrative fields render as "无"
fn narrative(value: &Option<String>) -> &str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or("无")
}

/// Render the fixed report template for one daily report.
///
/// The labels, field order and literal section values are an external
/// contract; consumers paste this block into group chat verbatim.
pub fn render_report(report: &DailyReport) -> String {
    format!(
        "姓名：{name}\n\
         时间：{date}\n\
         门店：{store}\n\
         ———【今日业绩】———\n\
         【售前】\n\
         交车：{policy_count}\n\
         谈单：{customer_count}\n\
         成交：{new_customer_count}\n\
         售前未洽谈原因：无\n\
         售前未成交原因：{morning_issue}\n\
         【售后】\n\
         进厂：{callback_count}\n\
         可谈：0\n\
         谈单：0\n\
         成交：0\n\
         售后未洽谈原因：无\n\
         售后未成交原因：-\n\
         ———【今日业绩小结】———\n\
         今日谈单：{customer_count}\n\
         今日成交：{new_customer_count}\n\
         今日成交金额：{policy_amount}\n\
         比亚迪今日车小安系统录单单量：0\n\
         比亚迪本月车小安系统累计录单单量：0\n\
         今日退单单量：\n\
         今日退单是售前成交或售后成交：\n\
         今日退单车主姓名：\n\
         退单车主成交日期：\n\
         退单是否录入车小安：\n\
         今日退单金额：\n\
         退单原因：\n\
         今日特殊情况报备：\n\
         ———【本月业绩】———\n\
         【售前】\n\
         目标：8\n\
         累计成交：4\n\
         累计交车：19\n\
         累计触客：13\n\
         触客率：68.42%\n\
         成交率：30.77%\n\
         渗透率：21.05%\n\
         达成率：50.00%\n\
         【售后】\n\
         目标：2\n\
         累计成交：1\n\
         累计进厂：192\n\
         累计可谈：27\n\
         累计谈单：17\n\
         可谈率：14.06%\n\
         触客率：62.96%\n\
         成交率：5.88%\n\
         -----【本月汇总】-----\n\
         本月成交：5\n\
         本月渗透率：26.32%\n\
         ———【明日计划】———\n\
         明日交车：0\n\
         {tomorrow_plan}",
        name = report.name,
        date = report.date,
        store = report.store,
        policy_count = num(&report.policy_count),
        customer_count = num(&report.customer_count),
        new_customer_count = num(&report.new_customer_count),
        morning_issue = narrative(&report.morning_issue),
        callback_count = num(&report.callback_count),
        policy_amount = num(&report.policy_amount),
        tomorrow_plan = report.tomorrow_plan.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_daily_reports;

    #[test]
    fn test_render_substitutes_record_fields() {
        let report = &seed_daily_reports()[0];
        let text = render_report(report);

        assert!(text.starts_with("姓名：王静\n时间：2025-04-21\n门店：甘肃兰州神迈领克\n"));
        assert!(text.contains("交车：1\n"));
        assert!(text.contains("今日成交金额：6800\n"));
        assert!(text.contains("售前未成交原因：客户对新车型保险方案有疑问，需要更详细的解释\n"));
        assert!(text.ends_with("明日交车：0\n1. 跟进今日预约的客户\n2. 完成产品手册更新\n3. 参加早会培训"));
    }

    #[test]
    fn test_render_defaults_for_missing_fields() {
        let mut report = seed_daily_reports().remove(0);
        report.policy_count = None;
        report.policy_amount = Some(String::new());
        report.morning_issue = None;
        report.tomorrow_plan = None;

        let text = render_report(&report);
        assert!(text.contains("交车：0\n"));
        assert!(text.contains("今日成交金额：0\n"));
        assert!(text.contains("售前未成交原因：无\n"));
        assert!(text.ends_with("明日交车：0\n"));
    }

    #[test]
    fn test_fixed_sections_are_literal() {
        let text = render_report(&seed_daily_reports()[0]);
        assert!(text.contains("———【本月业绩】———\n【售前】\n目标：8\n"));
        assert!(text.contains("-----【本月汇总】-----\n本月成交：5\n本月渗透率：26.32%\n"));
    }
}
